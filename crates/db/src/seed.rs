//! Surveys present at startup.

use surveyor_core::types::Timestamp;

use crate::models::survey::Survey;

/// The two starter surveys, stamped with `now`.
pub fn seed_surveys(now: Timestamp) -> Vec<Survey> {
    vec![
        Survey {
            id: 1,
            title: "Learning Experience Survey".to_string(),
            questions: 5,
            responses: 42,
            created_at: now,
        },
        Survey {
            id: 2,
            title: "Course Feedback".to_string(),
            questions: 3,
            responses: 18,
            created_at: now,
        },
    ]
}
