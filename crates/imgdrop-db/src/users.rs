use imgdrop_core::models::User;
use imgdrop_core::AppError;
use sqlx::PgPool;

/// Read access to the users table.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up a single user row by primary key.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load user {}: {}", id, e);
            AppError::Internal("Failed to load user".to_string())
        })?;

        Ok(user)
    }
}
