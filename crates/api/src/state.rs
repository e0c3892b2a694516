use std::sync::Arc;

use surveyor_db::SurveyStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The survey collection. Only `SurveyRepo` touches its contents.
    pub store: Arc<SurveyStore>,
}

impl AppState {
    pub fn new(store: SurveyStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
