use super::{PostgresClient, PostgresError};
use crate::models::{User, UserSummary};

impl PostgresClient {
    /// Insert a new account
    ///
    /// A duplicate email surfaces as `PostgresError::Conflict`.
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        role: &str,
    ) -> Result<User, PostgresError> {
        let query = r#"
            INSERT INTO users (email, password_hash, name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, name, avatar_url, role, created_at
        "#;

        let user = sqlx::query_as::<_, User>(query)
            .bind(email)
            .bind(password_hash)
            .bind(name)
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match PostgresError::from(e) {
                err if err.is_unique_violation() => {
                    PostgresError::Conflict(format!("email {} already registered", email))
                }
                err => err,
            })?;

        tracing::info!("Created user {} ({})", user.id, user.email);

        Ok(user)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, PostgresError> {
        let query = r#"
            SELECT id, email, password_hash, name, avatar_url, role, created_at
            FROM users
            WHERE email = $1
        "#;

        Ok(sqlx::query_as::<_, User>(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn find_user(&self, user_id: i32) -> Result<Option<User>, PostgresError> {
        let query = r#"
            SELECT id, email, password_hash, name, avatar_url, role, created_at
            FROM users
            WHERE id = $1
        "#;

        Ok(sqlx::query_as::<_, User>(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn get_profile(&self, user_id: i32) -> Result<UserSummary, PostgresError> {
        let query = r#"
            SELECT id, name, email, role, created_at
            FROM users
            WHERE id = $1
        "#;

        sqlx::query_as::<_, UserSummary>(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("user {}", user_id)))
    }

    pub async fn update_name(&self, user_id: i32, name: &str) -> Result<UserSummary, PostgresError> {
        let query = r#"
            UPDATE users SET name = $1
            WHERE id = $2
            RETURNING id, name, email, role, created_at
        "#;

        sqlx::query_as::<_, UserSummary>(query)
            .bind(name)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("user {}", user_id)))
    }

    /// All accounts, newest first
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, PostgresError> {
        let query = r#"
            SELECT id, name, email, role, created_at
            FROM users
            ORDER BY created_at DESC
        "#;

        Ok(sqlx::query_as::<_, UserSummary>(query)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn set_role(&self, user_id: i32, role: &str) -> Result<UserSummary, PostgresError> {
        let query = r#"
            UPDATE users SET role = $1
            WHERE id = $2
            RETURNING id, name, email, role, created_at
        "#;

        let user = sqlx::query_as::<_, UserSummary>(query)
            .bind(role)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("user {}", user_id)))?;

        tracing::info!("Set role of user {} to {}", user_id, role);

        Ok(user)
    }

    /// Promote an account by email, returning None if no such account exists
    pub async fn set_role_by_email(
        &self,
        email: &str,
        role: &str,
    ) -> Result<Option<UserSummary>, PostgresError> {
        let query = r#"
            UPDATE users SET role = $1
            WHERE email = $2
            RETURNING id, name, email, role, created_at
        "#;

        Ok(sqlx::query_as::<_, UserSummary>(query)
            .bind(role)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Delete an account and, through cascades, everything it owns
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Deleted user {} ({} rows)", user_id, result.rows_affected());

        Ok(result.rows_affected() > 0)
    }
}
