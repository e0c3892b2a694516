pub mod fallback;
pub mod survey;
