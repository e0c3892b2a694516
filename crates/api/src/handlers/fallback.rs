//! Handlers for requests that match no route.

use crate::error::AppError;

/// Any unmatched path under `/api`.
pub async fn api_not_found() -> AppError {
    AppError::RouteNotFound
}
