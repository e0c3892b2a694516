//! In-memory survey storage.
//!
//! [`SurveyStore`] owns the collection; [`repositories::SurveyRepo`] is the
//! only code that reads or mutates it.

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::SurveyStore;

/// Create the process-wide store, optionally filled with the seed surveys.
pub fn create_store(with_seed: bool) -> SurveyStore {
    if with_seed {
        let surveys = seed::seed_surveys(chrono::Utc::now());
        tracing::info!(count = surveys.len(), "Seeding survey store");
        SurveyStore::with_surveys(surveys)
    } else {
        SurveyStore::new()
    }
}
