//! Survey entity model and DTOs.

use serde::{Deserialize, Serialize};
use surveyor_core::survey::QuestionCount;
use surveyor_core::types::{DbId, Timestamp};

/// A survey record held by the store.
///
/// Serializes with the wire names `id`, `title`, `questions`, `responses`,
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: DbId,
    pub title: String,
    pub questions: i64,
    pub responses: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new survey.
///
/// Both fields are optional at the type level so a missing field produces
/// the domain validation message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSurvey {
    pub title: Option<String>,
    pub questions: Option<QuestionCount>,
}

/// DTO for updating an existing survey. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSurvey {
    pub title: Option<String>,
    pub questions: Option<QuestionCount>,
}
