use imgdrop_core::models::Post;
use imgdrop_core::AppError;
use sqlx::PgPool;

/// Read access to the posts table.
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all posts authored by `user_id`, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, title, content, created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list posts for user {}: {}", user_id, e);
            AppError::Internal("Failed to list posts".to_string())
        })?;

        Ok(posts)
    }
}
