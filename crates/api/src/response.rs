//! Response body types that wrap a survey with extra fields.

use serde::Serialize;
use surveyor_db::models::survey::Survey;

/// Confirmation message for `DELETE /api/surveys/{id}`.
pub const SURVEY_DELETED_MESSAGE: &str = "Survey deleted successfully";

/// `{ "message": ..., "survey": ... }` body returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeletedSurveyResponse {
    pub message: &'static str,
    pub survey: Survey,
}

impl DeletedSurveyResponse {
    pub fn new(survey: Survey) -> Self {
        Self {
            message: SURVEY_DELETED_MESSAGE,
            survey,
        }
    }
}
