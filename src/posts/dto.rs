use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::posts::repo::Post;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub author: String,
    pub created_at: OffsetDateTime,
    pub like_count: i64,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            content: p.content,
            author_id: p.author_id,
            author: p.author_name,
            created_at: p.created_at,
            like_count: p.like_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub count: i64,
}
