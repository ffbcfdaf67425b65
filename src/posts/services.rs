use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::posts::repo::{self, Post};

/// Upper bound on post body length.
const MAX_CONTENT_CHARS: usize = 10_000;

fn validate_content(content: &str) -> Result<&str, ApiError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::invalid("content is required"));
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(ApiError::invalid("content too long"));
    }
    Ok(content)
}

/// Blank or whitespace-only queries mean "no filter".
fn normalize_query(q: Option<&str>) -> Option<&str> {
    q.map(str::trim).filter(|q| !q.is_empty())
}

pub async fn feed(db: &PgPool, q: Option<&str>) -> Result<Vec<Post>, ApiError> {
    Ok(repo::list(db, normalize_query(q)).await?)
}

pub async fn view(db: &PgPool, id: Uuid) -> Result<Post, ApiError> {
    repo::find(db, id).await?.ok_or(ApiError::NotFound("post"))
}

pub async fn create_post(db: &PgPool, acting_user: Uuid, content: &str) -> Result<Post, ApiError> {
    let content = validate_content(content)?;
    let id = repo::insert(db, acting_user, content).await?;
    info!(post_id = %id, author = %acting_user, "post created");
    repo::find(db, id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("post missing after insert")))
}

/// Ownership is checked once, here; the repo performs no authorization.
pub async fn edit_post(
    db: &PgPool,
    id: Uuid,
    acting_user: Uuid,
    content: &str,
) -> Result<Post, ApiError> {
    let post = repo::find(db, id).await?.ok_or(ApiError::NotFound("post"))?;
    if post.author_id != acting_user {
        warn!(post_id = %id, acting_user = %acting_user, "edit denied: not the author");
        return Err(ApiError::Forbidden);
    }
    let content = validate_content(content)?;
    repo::update_content(db, id, content).await?;
    repo::find(db, id).await?.ok_or(ApiError::NotFound("post"))
}

pub async fn delete_post(db: &PgPool, id: Uuid, acting_user: Uuid) -> Result<(), ApiError> {
    let post = repo::find(db, id).await?.ok_or(ApiError::NotFound("post"))?;
    if post.author_id != acting_user {
        warn!(post_id = %id, acting_user = %acting_user, "delete denied: not the author");
        return Err(ApiError::Forbidden);
    }
    repo::delete(db, id).await?;
    info!(post_id = %id, "post deleted");
    Ok(())
}

/// A toggle, not an idempotent set: calling twice with the same user
/// restores the original membership.
pub async fn like_post(
    db: &PgPool,
    id: Uuid,
    acting_user: Uuid,
) -> Result<(bool, i64), ApiError> {
    repo::find(db, id).await?.ok_or(ApiError::NotFound("post"))?;
    Ok(repo::toggle_like(db, id, acting_user).await?)
}
