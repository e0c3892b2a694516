//! Handlers for the `/surveys` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use surveyor_core::error::CoreError;
use surveyor_core::parsing::parse_survey_id;
use surveyor_core::stats::SurveySummary;
use surveyor_core::survey::SURVEY_ENTITY;
use surveyor_core::types::DbId;
use surveyor_db::models::survey::{CreateSurvey, Survey, UpdateSurvey};
use surveyor_db::repositories::SurveyRepo;

use crate::error::{AppError, AppResult};
use crate::query::SurveyListParams;
use crate::response::DeletedSurveyResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SURVEY_ENTITY,
        id,
    })
}

/// GET /api/surveys
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SurveyListParams>,
) -> AppResult<Json<Vec<Survey>>> {
    let surveys = SurveyRepo::list(&state.store, &params.to_filter()).await;
    Ok(Json(surveys))
}

/// GET /api/surveys/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Survey>> {
    let id = parse_survey_id(&raw_id)?;
    let survey = SurveyRepo::find_by_id(&state.store, id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(survey))
}

/// POST /api/surveys
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateSurvey>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Survey>)> {
    let Json(input) = body?;
    let survey = SurveyRepo::create(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(survey)))
}

/// PUT /api/surveys/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateSurvey>, JsonRejection>,
) -> AppResult<Json<Survey>> {
    let id = parse_survey_id(&raw_id)?;
    let Json(input) = body?;
    let survey = SurveyRepo::update(&state.store, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(survey))
}

/// DELETE /api/surveys/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DeletedSurveyResponse>> {
    let id = parse_survey_id(&raw_id)?;
    let survey = SurveyRepo::delete(&state.store, id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DeletedSurveyResponse::new(survey)))
}

/// GET /api/surveys/stats/summary
pub async fn summary(State(state): State<AppState>) -> Json<SurveySummary> {
    Json(SurveyRepo::summary(&state.store).await)
}
