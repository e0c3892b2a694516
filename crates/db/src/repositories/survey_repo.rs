//! Repository for the survey collection.

use surveyor_core::error::CoreError;
use surveyor_core::filter::SurveyFilter;
use surveyor_core::stats::{summarize, SurveyFigures, SurveySummary};
use surveyor_core::survey::{resolve_changes, validate_new_survey};
use surveyor_core::types::DbId;

use crate::models::survey::{CreateSurvey, Survey, UpdateSurvey};
use crate::store::SurveyStore;

/// Provides CRUD operations and statistics for surveys.
pub struct SurveyRepo;

impl SurveyRepo {
    /// Validate and append a new survey, returning the created record.
    ///
    /// The id is one more than the largest id ever assigned, or 1 for a fresh
    /// empty store. Responses start at zero.
    pub async fn create(store: &SurveyStore, input: &CreateSurvey) -> Result<Survey, CoreError> {
        let fields = validate_new_survey(input.title.as_deref(), input.questions.as_ref())?;

        let mut table = store.write().await;
        let id = table.next_id();
        let survey = Survey {
            id,
            title: fields.title,
            questions: fields.questions,
            responses: 0,
            created_at: chrono::Utc::now(),
        };
        table.surveys.push(survey.clone());
        table.last_id = id;

        tracing::info!(survey_id = survey.id, title = %survey.title, "Survey created");
        Ok(survey)
    }

    /// Find a survey by id.
    pub async fn find_by_id(store: &SurveyStore, id: DbId) -> Option<Survey> {
        store
            .read()
            .await
            .surveys
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// List surveys passing `filter`, in insertion order.
    pub async fn list(store: &SurveyStore, filter: &SurveyFilter) -> Vec<Survey> {
        store
            .read()
            .await
            .surveys
            .iter()
            .filter(|s| filter.matches(&s.title, s.responses))
            .cloned()
            .collect()
    }

    /// Update a survey. Only non-empty, non-zero fields in `input` are applied.
    ///
    /// Returns `None` if no survey with the given `id` exists, before the
    /// input is looked at.
    pub async fn update(
        store: &SurveyStore,
        id: DbId,
        input: &UpdateSurvey,
    ) -> Result<Option<Survey>, CoreError> {
        let mut table = store.write().await;
        let Some(survey) = table.surveys.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        let changes = resolve_changes(input.title.as_deref(), input.questions.as_ref())?;

        if let Some(title) = changes.title {
            survey.title = title;
        }
        if let Some(questions) = changes.questions {
            survey.questions = questions;
        }

        tracing::debug!(survey_id = id, "Survey updated");
        Ok(Some(survey.clone()))
    }

    /// Remove a survey, returning the removed record.
    pub async fn delete(store: &SurveyStore, id: DbId) -> Option<Survey> {
        let mut table = store.write().await;
        let index = table.surveys.iter().position(|s| s.id == id)?;
        let removed = table.surveys.remove(index);

        tracing::info!(survey_id = id, title = %removed.title, "Survey deleted");
        Some(removed)
    }

    /// Totals, mean question count and most answered survey.
    pub async fn summary(store: &SurveyStore) -> SurveySummary {
        let table = store.read().await;
        summarize(table.surveys.iter().map(|s| SurveyFigures {
            title: &s.title,
            questions: s.questions,
            responses: s.responses,
        }))
    }
}
