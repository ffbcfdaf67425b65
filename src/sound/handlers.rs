use axum::{
    extract::{Query, State},
    Json,
};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

use super::dto::{SoundQuery, SoundResponse};
use super::services;

#[instrument(skip(state))]
pub async fn get_sound(
    State(state): State<AppState>,
    Query(p): Query<SoundQuery>,
) -> Result<Json<SoundResponse>, ApiError> {
    let tag = p.tag.as_deref().map(str::trim).unwrap_or("");
    let tag = if tag.is_empty() { "rain" } else { tag };

    let client = state
        .sounds
        .as_deref()
        .ok_or(ApiError::MissingCredential("FREESOUND_TOKEN"))?;

    let sound = services::pick_sound(client, state.picker.as_ref(), tag).await?;
    Ok(Json(sound))
}
