//! List filtering for surveys.

use crate::parsing::parse_leading_int;

/// Lower bound on the response count of listed surveys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseThreshold {
    /// Keep surveys with `responses >= n`.
    AtLeast(i64),
    /// The client sent a non-numeric bound; nothing can satisfy it.
    Unsatisfiable,
}

/// Criteria for listing surveys. A `None` criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyFilter {
    /// Case-insensitive substring of the title, stored lowercased.
    title: Option<String>,
    min_responses: Option<ResponseThreshold>,
}

impl SurveyFilter {
    /// Build a filter from raw query-string values.
    ///
    /// Empty values are treated as absent.
    pub fn from_query(title: Option<&str>, min_responses: Option<&str>) -> Self {
        let title = title.filter(|t| !t.is_empty()).map(str::to_lowercase);
        let min_responses = min_responses.filter(|m| !m.is_empty()).map(|raw| {
            parse_leading_int(raw).map_or(ResponseThreshold::Unsatisfiable, ResponseThreshold::AtLeast)
        });
        Self {
            title,
            min_responses,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_lowercase());
        self
    }

    pub fn with_min_responses(mut self, min: i64) -> Self {
        self.min_responses = Some(ResponseThreshold::AtLeast(min));
        self
    }

    pub fn min_responses(&self) -> Option<ResponseThreshold> {
        self.min_responses
    }

    /// Whether a survey with this title and response count passes the filter.
    pub fn matches(&self, title: &str, responses: i64) -> bool {
        let title_ok = self
            .title
            .as_deref()
            .map_or(true, |needle| title.to_lowercase().contains(needle));

        let responses_ok = match self.min_responses {
            None => true,
            Some(ResponseThreshold::AtLeast(min)) => responses >= min,
            Some(ResponseThreshold::Unsatisfiable) => false,
        };

        title_ok && responses_ok
    }
}
