pub mod client;
mod dto;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/sound/", get(handlers::get_sound))
}
