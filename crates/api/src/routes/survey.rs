//! Route definitions for the `/surveys` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{fallback, survey};
use crate::state::AppState;

/// Routes mounted at `/surveys`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /stats/summary   -> summary
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// ```
///
/// Any other method on these paths answers the JSON "Route not found" 404.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(survey::list)
                .post(survey::create)
                .fallback(fallback::api_not_found),
        )
        .route(
            "/stats/summary",
            get(survey::summary).fallback(fallback::api_not_found),
        )
        .route(
            "/{id}",
            get(survey::get_by_id)
                .put(survey::update)
                .delete(survey::delete)
                .fallback(fallback::api_not_found),
        )
}
