//! Request-level middleware.
//!
//! - [`request_log::log_request`] -- One log line per response with status and latency.
//! - [`panic::panic_response`] -- Converts a handler panic into a 500 JSON body.

pub mod panic;
pub mod request_log;
