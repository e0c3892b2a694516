//! Query parameter types for API handlers.

use serde::Deserialize;
use surveyor_core::filter::SurveyFilter;

/// Query parameters for `GET /api/surveys` (`?title=&minResponses=`).
///
/// Kept as raw strings so a non-numeric `minResponses` reaches the filter
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyListParams {
    pub title: Option<String>,
    pub min_responses: Option<String>,
}

impl SurveyListParams {
    pub fn to_filter(&self) -> SurveyFilter {
        SurveyFilter::from_query(self.title.as_deref(), self.min_responses.as_deref())
    }
}
