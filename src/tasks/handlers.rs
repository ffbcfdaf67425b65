use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::instrument;

use crate::{error::ApiError, state::AppState, tasks::client::TaskBoard};

use super::dto::{CloseTaskRequest, ClosedResponse, CreateTaskRequest, TaskItem, TaskListResponse};
use super::services;

fn board(state: &AppState) -> Result<&dyn TaskBoard, ApiError> {
    state
        .tasks
        .as_deref()
        .ok_or(ApiError::MissingCredential("TODOIST_TOKEN"))
}

#[instrument(skip(state))]
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<TaskListResponse>, ApiError> {
    let tasks = services::list_tasks(board(&state)?).await?;
    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskItem::from).collect(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<TaskItem>, ApiError> {
    let board = board(&state)?;
    let Json(body) = payload.map_err(|_| ApiError::invalid("invalid JSON body"))?;

    let task = services::create_task(board, &body.content).await?;
    Ok(Json(task.into()))
}

#[instrument(skip(state, payload))]
pub async fn close_task(
    State(state): State<AppState>,
    payload: Result<Json<CloseTaskRequest>, JsonRejection>,
) -> Result<Json<ClosedResponse>, ApiError> {
    let board = board(&state)?;
    let Json(body) = payload.map_err(|_| ApiError::invalid("invalid JSON body"))?;

    services::close_task(board, &body.task_id).await?;
    Ok(Json(ClosedResponse { ok: true }))
}
