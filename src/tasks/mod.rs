pub mod client;
mod dto;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todoist/tasks/", get(handlers::list_tasks))
        .route("/api/todoist/task/create/", post(handlers::create_task))
        .route("/api/todoist/task/close/", post(handlers::close_task))
}
