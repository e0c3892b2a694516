//! Survey field rules: required fields on create, partial changes on update.
//!
//! Update follows "truthy overwrite" semantics: an empty title or a zero
//! question count means "keep the current value", not "clear it".

use serde::Deserialize;

use crate::error::CoreError;
use crate::parsing::parse_leading_int;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `CoreError::NotFound`.
pub const SURVEY_ENTITY: &str = "Survey";

/// Returned when create is missing its title or question count.
pub const MISSING_FIELDS_MESSAGE: &str = "Title and questions count are required";

/// Returned when a question count is present but not a positive integer.
pub const INVALID_QUESTIONS_MESSAGE: &str = "Questions count must be a positive integer";

// ---------------------------------------------------------------------------
// Question count input
// ---------------------------------------------------------------------------

/// A question count as sent by a client.
///
/// HTML forms submit numbers as strings, API clients submit JSON numbers;
/// both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QuestionCount {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl QuestionCount {
    /// Resolve to an integer. `Ok(None)` means the value is blank.
    ///
    /// Decimals are truncated toward zero; text uses leading-integer parsing.
    pub fn resolve(&self) -> Result<Option<i64>, CoreError> {
        match self {
            Self::Integer(n) => Ok(Some(*n)),
            Self::Decimal(n) => Ok(Some(n.trunc() as i64)),
            Self::Text(s) if s.trim().is_empty() => Ok(None),
            Self::Text(s) => parse_leading_int(s)
                .map(Some)
                .ok_or_else(|| CoreError::Validation(INVALID_QUESTIONS_MESSAGE.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Validated shapes
// ---------------------------------------------------------------------------

/// Fields for a new survey after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSurveyFields {
    pub title: String,
    pub questions: i64,
}

/// Changes to apply to an existing survey. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyChanges {
    pub title: Option<String>,
    pub questions: Option<i64>,
}

impl SurveyChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.questions.is_none()
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate create input. Title must be non-empty and the question count
/// must resolve to a positive integer.
pub fn validate_new_survey(
    title: Option<&str>,
    questions: Option<&QuestionCount>,
) -> Result<NewSurveyFields, CoreError> {
    let title = title.filter(|t| !t.is_empty());
    let questions = match questions {
        Some(q) => q.resolve()?.filter(|n| *n != 0),
        None => None,
    };

    let (Some(title), Some(questions)) = (title, questions) else {
        return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    };

    if questions < 0 {
        return Err(CoreError::Validation(INVALID_QUESTIONS_MESSAGE.to_string()));
    }

    Ok(NewSurveyFields {
        title: title.to_string(),
        questions,
    })
}

/// Reduce update input to the changes that actually apply.
///
/// Empty titles and zero counts are dropped. A negative count is rejected.
pub fn resolve_changes(
    title: Option<&str>,
    questions: Option<&QuestionCount>,
) -> Result<SurveyChanges, CoreError> {
    let questions = match questions {
        Some(q) => q.resolve()?.filter(|n| *n != 0),
        None => None,
    };

    if questions.is_some_and(|n| n < 0) {
        return Err(CoreError::Validation(INVALID_QUESTIONS_MESSAGE.to_string()));
    }

    Ok(SurveyChanges {
        title: title.filter(|t| !t.is_empty()).map(str::to_string),
        questions,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
