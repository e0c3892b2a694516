use surveyor_core::types::DbId;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::survey::Survey;

/// Insertion-ordered survey collection.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across request handlers. Writers hold the write lock for the whole
/// operation, which keeps id assignment race free.
#[derive(Debug, Default)]
pub struct SurveyStore {
    table: RwLock<SurveyTable>,
}

/// The locked contents of a [`SurveyStore`].
#[derive(Debug, Default)]
pub(crate) struct SurveyTable {
    pub(crate) surveys: Vec<Survey>,
    /// Largest id ever assigned, including ids of deleted surveys.
    pub(crate) last_id: DbId,
}

impl SurveyTable {
    /// Next id for a new survey. Ids are never handed out twice.
    pub(crate) fn next_id(&self) -> DbId {
        let max_held = self.surveys.iter().map(|s| s.id).max().unwrap_or(0);
        self.last_id.max(max_held) + 1
    }
}

impl SurveyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `surveys` in the given order.
    pub fn with_surveys(surveys: Vec<Survey>) -> Self {
        let last_id = surveys.iter().map(|s| s.id).max().unwrap_or(0);
        Self {
            table: RwLock::new(SurveyTable { surveys, last_id }),
        }
    }

    /// Number of surveys currently held.
    pub async fn len(&self) -> usize {
        self.table.read().await.surveys.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.surveys.is_empty()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, SurveyTable> {
        self.table.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, SurveyTable> {
        self.table.write().await
    }
}
