use super::{PostgresClient, PostgresError};
use crate::models::{Group, GroupMessage};

impl PostgresClient {
    /// All groups by name with live member counts
    pub async fn list_groups(&self) -> Result<Vec<Group>, PostgresError> {
        let query = r#"
            SELECT g.id, g.name, g.slug, g.genre, g.description, g.icon, g.created_at,
                   COUNT(gm.user_id) AS member_count
            FROM groups g
            LEFT JOIN group_members gm ON g.id = gm.group_id
            GROUP BY g.id
            ORDER BY g.name
        "#;

        Ok(sqlx::query_as::<_, Group>(query)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Groups the user belongs to, with live member counts
    pub async fn user_groups(&self, user_id: i32) -> Result<Vec<Group>, PostgresError> {
        let query = r#"
            SELECT g.id, g.name, g.slug, g.genre, g.description, g.icon, g.created_at,
                   COUNT(gm2.user_id) AS member_count
            FROM groups g
            JOIN group_members gm ON g.id = gm.group_id AND gm.user_id = $1
            LEFT JOIN group_members gm2 ON g.id = gm2.group_id
            GROUP BY g.id
            ORDER BY g.name
        "#;

        Ok(sqlx::query_as::<_, Group>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn find_group_by_slug(&self, slug: &str) -> Result<Option<Group>, PostgresError> {
        let query = r#"
            SELECT g.id, g.name, g.slug, g.genre, g.description, g.icon, g.created_at,
                   (SELECT COUNT(*) FROM group_members gm WHERE gm.group_id = g.id) AS member_count
            FROM groups g
            WHERE g.slug = $1
        "#;

        Ok(sqlx::query_as::<_, Group>(query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn group_exists(&self, group_id: i32) -> Result<bool, PostgresError> {
        Ok(sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM groups WHERE id = $1)")
            .bind(group_id)
            .fetch_one(&self.pool)
            .await?)
    }

    /// Add a member; joining twice is a no-op
    pub async fn join_group(&self, group_id: i32, user_id: i32) -> Result<bool, PostgresError> {
        let query = r#"
            INSERT INTO group_members (group_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (group_id, user_id) DO NOTHING
        "#;

        let result = sqlx::query(query)
            .bind(group_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!("User {} joined group {}", user_id, group_id);

        Ok(result.rows_affected() > 0)
    }

    pub async fn leave_group(&self, group_id: i32, user_id: i32) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM group_members WHERE group_id = $1 AND user_id = $2")
            .bind(group_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!("User {} left group {}", user_id, group_id);

        Ok(result.rows_affected() > 0)
    }

    pub async fn is_member(&self, group_id: i32, user_id: i32) -> Result<bool, PostgresError> {
        let query = r#"
            SELECT EXISTS(SELECT 1 FROM group_members WHERE group_id = $1 AND user_id = $2)
        "#;

        Ok(sqlx::query_scalar::<_, bool>(query)
            .bind(group_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?)
    }

    /// Latest chat messages with author name and email, newest first
    pub async fn group_messages(
        &self,
        group_id: i32,
        limit: i64,
    ) -> Result<Vec<GroupMessage>, PostgresError> {
        let query = r#"
            SELECT m.id, m.group_id, m.user_id, m.message, m.created_at, m.updated_at,
                   u.name AS user_name, u.email AS user_email
            FROM group_messages m
            JOIN users u ON m.user_id = u.id
            WHERE m.group_id = $1
            ORDER BY m.created_at DESC
            LIMIT $2
        "#;

        Ok(sqlx::query_as::<_, GroupMessage>(query)
            .bind(group_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Store a chat message and return it with its author
    pub async fn post_message(
        &self,
        group_id: i32,
        user_id: i32,
        message: &str,
    ) -> Result<GroupMessage, PostgresError> {
        let query = r#"
            WITH inserted AS (
                INSERT INTO group_messages (group_id, user_id, message)
                VALUES ($1, $2, $3)
                RETURNING id, group_id, user_id, message, created_at, updated_at
            )
            SELECT i.id, i.group_id, i.user_id, i.message, i.created_at, i.updated_at,
                   u.name AS user_name, u.email AS user_email
            FROM inserted i
            JOIN users u ON i.user_id = u.id
        "#;

        let stored = sqlx::query_as::<_, GroupMessage>(query)
            .bind(group_id)
            .bind(user_id)
            .bind(message)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("User {} posted message {} in group {}", user_id, stored.id, group_id);

        Ok(stored)
    }

    /// Rewrite a message; None when it does not exist or belongs to someone else
    pub async fn edit_message(
        &self,
        message_id: i32,
        user_id: i32,
        message: &str,
    ) -> Result<Option<GroupMessage>, PostgresError> {
        let query = r#"
            UPDATE group_messages
            SET message = $1, updated_at = NOW()
            WHERE id = $2 AND user_id = $3
            RETURNING id, group_id, user_id, message, created_at, updated_at
        "#;

        Ok(sqlx::query_as::<_, GroupMessage>(query)
            .bind(message)
            .bind(message_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Delete a message if the user wrote it
    pub async fn delete_message(&self, message_id: i32, user_id: i32) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM group_messages WHERE id = $1 AND user_id = $2")
            .bind(message_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
