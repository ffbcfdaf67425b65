use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{auth::AuthUser, error::ApiError, state::AppState};

use super::dto::{FeedQuery, LikeResponse, PostBody, PostResponse};
use super::services;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(feed))
        .route("/post/:id/", get(post_detail))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/post_create", post(post_create))
        .route("/post/:id/edit/", post(post_edit))
        .route("/post/:id/delete/", post(post_delete))
        .route("/post/:id/like/", post(like_post))
}

#[instrument(skip(state))]
pub async fn feed(
    State(state): State<AppState>,
    Query(p): Query<FeedQuery>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = services::feed(&state.db, p.q.as_deref()).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn post_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = services::view(&state.db, id).await?;
    Ok(Json(post.into()))
}

#[instrument(skip(state, body))]
pub async fn post_create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<PostBody>,
) -> Result<(StatusCode, HeaderMap, Json<PostResponse>), ApiError> {
    let created = services::create_post(&state.db, user_id, &body.content).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::LOCATION,
        format!("/post/{}/", created.id).parse().unwrap(),
    );

    Ok((StatusCode::CREATED, headers, Json(created.into())))
}

#[instrument(skip(state, body))]
pub async fn post_edit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<PostBody>,
) -> Result<Json<PostResponse>, ApiError> {
    let updated = services::edit_post(&state.db, id, user_id, &body.content).await?;
    Ok(Json(updated.into()))
}

#[instrument(skip(state))]
pub async fn post_delete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::delete_post(&state.db, id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn like_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LikeResponse>, ApiError> {
    let (liked, count) = services::like_post(&state.db, id, user_id).await?;
    Ok(Json(LikeResponse { liked, count }))
}
