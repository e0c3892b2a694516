//! Summary statistics over the survey collection.

use serde::Serialize;

/// `mostPopular` value for an empty collection.
pub const NO_SURVEYS_TITLE: &str = "No surveys yet";

/// The figures of one survey that feed into the summary.
#[derive(Debug, Clone, Copy)]
pub struct SurveyFigures<'a> {
    pub title: &'a str,
    pub questions: i64,
    pub responses: i64,
}

/// Response body for `GET /api/surveys/stats/summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub total_surveys: usize,
    pub total_responses: i128,
    /// Mean question count, one decimal place.
    pub average_questions: String,
    pub most_popular: String,
}

/// Compute the summary in a single pass.
///
/// Totals accumulate in `i128`, so no combination of `i64` counts overflows.
/// Ties for the most responses go to the survey seen first.
pub fn summarize<'a, I>(surveys: I) -> SurveySummary
where
    I: IntoIterator<Item = SurveyFigures<'a>>,
{
    let mut total_surveys = 0usize;
    let mut total_responses = 0i128;
    let mut total_questions = 0i128;
    let mut most_popular: Option<SurveyFigures<'a>> = None;

    for survey in surveys {
        total_surveys += 1;
        total_responses += i128::from(survey.responses);
        total_questions += i128::from(survey.questions);
        if most_popular.map_or(true, |best| survey.responses > best.responses) {
            most_popular = Some(survey);
        }
    }

    SurveySummary {
        total_surveys,
        total_responses,
        average_questions: format_average(total_questions, total_surveys),
        most_popular: most_popular
            .map_or_else(|| NO_SURVEYS_TITLE.to_string(), |s| s.title.to_string()),
    }
}

/// Format `sum / count` with one decimal place, rounding halves up.
///
/// Works in integer tenths so `1.25` becomes `"1.3"` regardless of float
/// representation. An empty collection averages to `"0.0"`.
pub fn format_average(sum: i128, count: usize) -> String {
    if count == 0 {
        return "0.0".to_string();
    }

    let count = count as i128;
    let sign = if sum < 0 { "-" } else { "" };
    let tenths = (sum.abs() * 20 + count) / (count * 2);

    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}
