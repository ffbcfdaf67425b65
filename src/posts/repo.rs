use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Read model for a post: the row joined with its author's username and the
/// current like cardinality.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: OffsetDateTime,
    pub like_count: i64,
}

const POST_SELECT: &str = r#"
    SELECT p.id, p.content, p.author_id, u.username AS author_name, p.created_at,
           (SELECT COUNT(*) FROM post_likes pl WHERE pl.post_id = p.id) AS like_count
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

/// Escape LIKE metacharacters so the feed search is a literal substring
/// match.
fn escape_like(q: &str) -> String {
    q.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Feed listing: newest first, id as tie-break so identical timestamps
/// order deterministically. `query` filters on case-insensitive substring.
pub async fn list(db: &PgPool, query: Option<&str>) -> anyhow::Result<Vec<Post>> {
    let pattern = query.map(|q| format!("%{}%", escape_like(q)));
    let posts = sqlx::query_as::<_, Post>(&format!(
        r#"{POST_SELECT}
        WHERE $1::text IS NULL OR p.content ILIKE $1
        ORDER BY p.created_at DESC, p.id DESC
        "#
    ))
    .bind(pattern)
    .fetch_all(db)
    .await?;
    Ok(posts)
}

pub async fn find(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(&format!("{POST_SELECT} WHERE p.id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await?;
    Ok(post)
}

pub async fn insert(db: &PgPool, author_id: Uuid, content: &str) -> anyhow::Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO posts (author_id, content)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(author_id)
    .bind(content)
    .fetch_one(db)
    .await?;
    Ok(id)
}

/// Only the body is mutable; author and created_at never change.
pub async fn update_content(db: &PgPool, id: Uuid, content: &str) -> anyhow::Result<()> {
    sqlx::query("UPDATE posts SET content = $2 WHERE id = $1")
        .bind(id)
        .bind(content)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}

/// Toggle `user_id`'s membership in the post's like set and return the new
/// membership plus the post-operation count. One transaction, row-level
/// DELETE/INSERT only: concurrent toggles from distinct users both land.
pub async fn toggle_like(
    db: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> anyhow::Result<(bool, i64)> {
    let mut tx = db.begin().await?;

    let removed = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
        .bind(post_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let liked = if removed == 0 {
        sqlx::query(
            r#"
            INSERT INTO post_likes (post_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
        true
    } else {
        false
    };

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok((liked, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like(r"back\slash"), r"back\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
