use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::models::{Activity, ActivityPayload, Envelope};
use crate::validation;
use crate::web::{ApiError, AppState};

use super::parse_id;

fn not_found(id: i32) -> ApiError {
    ApiError::not_found(format!("Activity with ID {id} Not Found"))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Activity>>>, ApiError> {
    let activities = state.activity_service.list().await?;
    Ok(Json(Envelope::success(activities)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Activity>>, ApiError> {
    let id = parse_id(&id);
    let activity = state
        .activity_service
        .find(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(Envelope::success(activity)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ActivityPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Activity>>), ApiError> {
    let Json(payload) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let errors = validation::validate_activity(&payload);
    if let Some(message) = validation::first_error_message(&errors) {
        return Err(ApiError::bad_request(message));
    }

    let activity = state
        .activity_service
        .create(payload.title(), payload.email())
        .await?;

    Ok((StatusCode::CREATED, Json(Envelope::success(activity))))
}

/// Validation runs before the existence check, so a blank title on a
/// missing id reports 400, not 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ActivityPayload>, JsonRejection>,
) -> Result<Json<Envelope<Activity>>, ApiError> {
    let Json(payload) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let errors = validation::validate_activity(&payload);
    if let Some(message) = validation::first_error_message(&errors) {
        return Err(ApiError::bad_request(message));
    }

    let id = parse_id(&id);
    let mut activity = state
        .activity_service
        .find(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    activity.apply_update(&payload);
    let activity = state.activity_service.save(&activity).await?;

    Ok(Json(Envelope::success(activity)))
}

/// The cascade to owned todos runs after the parent delete and is not
/// wrapped in a transaction.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    let id = parse_id(&id);
    let affected = state.activity_service.delete(id).await?;
    if affected == 0 {
        return Err(not_found(id));
    }

    state.todo_service.delete_for_activity(id).await?;

    Ok(Json(Envelope::empty()))
}
