use super::{PostgresClient, PostgresError};
use crate::models::{Review, ReviewRequest, ReviewWithAuthor};

const REVIEW_COLUMNS: &str = "r.id, r.user_id, r.game_id, r.game_name, r.game_image, r.rating, \
     r.comment, r.is_public, r.group_id, r.created_at, r.updated_at";

impl PostgresClient {
    /// Page of public reviews with author name and avatar, newest first
    pub async fn public_reviews(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ReviewWithAuthor>, PostgresError> {
        let query = format!(
            r#"
            SELECT {REVIEW_COLUMNS}, u.name AS user_name, u.avatar_url AS user_avatar
            FROM reviews r
            JOIN users u ON r.user_id = u.id
            WHERE r.is_public = true
            ORDER BY r.created_at DESC
            LIMIT $1 OFFSET $2
            "#
        );

        Ok(sqlx::query_as::<_, ReviewWithAuthor>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn count_public_reviews(&self) -> Result<i64, PostgresError> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE is_public = true")
            .fetch_one(&self.pool)
            .await?)
    }

    /// Public reviews of one game, newest first
    pub async fn game_reviews(&self, game_id: i32) -> Result<Vec<ReviewWithAuthor>, PostgresError> {
        let query = format!(
            r#"
            SELECT {REVIEW_COLUMNS}, u.name AS user_name, u.avatar_url AS user_avatar
            FROM reviews r
            JOIN users u ON r.user_id = u.id
            WHERE r.game_id = $1 AND r.is_public = true
            ORDER BY r.created_at DESC
            "#
        );

        Ok(sqlx::query_as::<_, ReviewWithAuthor>(&query)
            .bind(game_id)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Average public rating (0 when unreviewed) and review count
    pub async fn game_rating(&self, game_id: i32) -> Result<(f64, i64), PostgresError> {
        let query = r#"
            SELECT COALESCE(AVG(rating)::float8, 0) AS avg_rating, COUNT(*) AS count
            FROM reviews
            WHERE game_id = $1 AND is_public = true
        "#;

        Ok(sqlx::query_as::<_, (f64, i64)>(query)
            .bind(game_id)
            .fetch_one(&self.pool)
            .await?)
    }

    /// Every review the user wrote, public or not
    pub async fn user_reviews(&self, user_id: i32) -> Result<Vec<Review>, PostgresError> {
        let query = r#"
            SELECT id, user_id, game_id, game_name, game_image, rating, comment,
                   is_public, group_id, created_at, updated_at
            FROM reviews
            WHERE user_id = $1
            ORDER BY created_at DESC
        "#;

        Ok(sqlx::query_as::<_, Review>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Create or update the user's review of a game
    ///
    /// One review per (user, game); a second submission overwrites rating,
    /// comment, visibility and group tag. `group_id` is only overwritten
    /// when the new submission carries one.
    pub async fn upsert_review(
        &self,
        user_id: i32,
        review: &ReviewRequest,
        group_id: Option<i32>,
    ) -> Result<Review, PostgresError> {
        let query = r#"
            INSERT INTO reviews (user_id, game_id, game_name, game_image, rating, comment, is_public, group_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, game_id)
            DO UPDATE SET
                rating = EXCLUDED.rating,
                comment = EXCLUDED.comment,
                is_public = EXCLUDED.is_public,
                group_id = COALESCE(EXCLUDED.group_id, reviews.group_id),
                updated_at = NOW()
            RETURNING id, user_id, game_id, game_name, game_image, rating, comment,
                      is_public, group_id, created_at, updated_at
        "#;

        let stored = sqlx::query_as::<_, Review>(query)
            .bind(user_id)
            .bind(review.game_id)
            .bind(&review.game_name)
            .bind(&review.game_image)
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.is_public)
            .bind(group_id)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            "Stored review {} by user {} for game {} (rating {})",
            stored.id,
            user_id,
            stored.game_id,
            stored.rating
        );

        Ok(stored)
    }

    /// Delete a review if the user wrote it
    pub async fn delete_review(&self, review_id: i32, user_id: i32) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1 AND user_id = $2")
            .bind(review_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Latest reviews tagged with a group, with author name and email
    pub async fn group_reviews(
        &self,
        group_id: i32,
        limit: i64,
    ) -> Result<Vec<ReviewWithAuthor>, PostgresError> {
        let query = format!(
            r#"
            SELECT {REVIEW_COLUMNS}, u.name AS user_name, u.avatar_url AS user_avatar,
                   u.email AS user_email
            FROM reviews r
            JOIN users u ON r.user_id = u.id
            WHERE r.group_id = $1
            ORDER BY r.created_at DESC
            LIMIT $2
            "#
        );

        Ok(sqlx::query_as::<_, ReviewWithAuthor>(&query)
            .bind(group_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }
}
