//! Domain logic for the survey service.
//!
//! Pure functions and types only: id parsing, input validation, list
//! filtering and summary statistics. Storage lives in `surveyor-db`.

pub mod error;
pub mod filter;
pub mod parsing;
pub mod stats;
pub mod survey;
pub mod types;
