pub mod health;
pub mod survey;

use axum::Router;

use crate::handlers::fallback;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /surveys                  list, create
/// /surveys/stats/summary    summary statistics
/// /surveys/{id}             get, update, delete
/// ```
///
/// Any other path under `/api` answers 404 with a JSON error body.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/surveys", survey::router())
        .fallback(fallback::api_not_found)
}
