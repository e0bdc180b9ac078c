use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::models::{
    Envelope, NewTodoPayload, TodoCreated, TodoPatch, TodoView, ACTIVE_FLAG, DEFAULT_PRIORITY,
};
use crate::validation;
use crate::web::{ApiError, AppState};

use super::parse_id;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub activity_group_id: Option<String>,
}

fn not_found(id: i32) -> ApiError {
    ApiError::not_found(format!("Todo with ID {id} Not Found"))
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Envelope<Vec<TodoView>>>, ApiError> {
    // The filter applies only when the parameter parses to a non-zero id.
    let filter = query
        .activity_group_id
        .as_deref()
        .map(parse_id)
        .filter(|id| *id != 0);

    let todos = state.todo_service.list(filter).await?;
    let views = todos.iter().map(TodoView::from).collect();

    Ok(Json(Envelope::success(views)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<TodoView>>, ApiError> {
    let id = parse_id(&id);
    let todo = state
        .todo_service
        .find(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(Envelope::success(TodoView::from(&todo))))
}

/// Creation always forces `is_active = "1"` and `priority = "very-high"`;
/// client-supplied values for those two fields are discarded.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewTodoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<TodoCreated>>), ApiError> {
    let Json(payload) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let errors = validation::validate_new_todo(&payload);
    if let Some(message) = validation::first_error_message(&errors) {
        return Err(ApiError::bad_request(message));
    }

    let todo = state
        .todo_service
        .create(
            payload.activity_group_id(),
            payload.title(),
            ACTIVE_FLAG,
            DEFAULT_PRIORITY,
        )
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                ApiError::bad_request("activity_group_id not found")
            } else {
                err.into()
            }
        })?;

    Ok((StatusCode::CREATED, Json(Envelope::success(TodoCreated::from(&todo)))))
}

/// No field is required here; an unparsable or absent body is treated as an
/// empty patch rather than rejected.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Envelope<TodoView>>, ApiError> {
    let patch = body.map(|Json(patch)| patch).unwrap_or_default();

    let id = parse_id(&id);
    let mut todo = state
        .todo_service
        .find(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    todo.apply_patch(&patch);
    let todo = state.todo_service.save(&todo).await?;

    Ok(Json(Envelope::success(TodoView::from(&todo))))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    let id = parse_id(&id);
    let affected = state.todo_service.delete(id).await?;
    if affected == 0 {
        return Err(not_found(id));
    }

    Ok(Json(Envelope::empty()))
}
