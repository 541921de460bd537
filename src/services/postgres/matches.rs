use super::{PostgresClient, PostgresError};
use crate::models::{GameStat, LikedGame, MatchWithUser, MatchedGame, SavedMatch};

impl PostgresClient {
    /// The user's matches, newest first
    pub async fn list_matches(&self, user_id: i32) -> Result<Vec<SavedMatch>, PostgresError> {
        let query = r#"
            SELECT id, user_id, game_id, game_name, game_image, game_genres,
                   game_rating, super_liked, created_at
            FROM matches
            WHERE user_id = $1
            ORDER BY created_at DESC
        "#;

        Ok(sqlx::query_as::<_, SavedMatch>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Save a match
    ///
    /// Uses INSERT ... ON CONFLICT DO NOTHING so a repeat swipe is a no-op.
    /// Returns whether a new row was written.
    pub async fn save_match(&self, user_id: i32, game: &MatchedGame) -> Result<bool, PostgresError> {
        let query = r#"
            INSERT INTO matches (user_id, game_id, game_name, game_image, game_genres, game_rating, super_liked)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, game_id) DO NOTHING
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(game.id)
            .bind(&game.name)
            .bind(&game.image)
            .bind(&game.genres)
            .bind(game.rating)
            .bind(game.super_liked)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved match: {} -> {} ({})", user_id, game.id, game.name);

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_match(&self, user_id: i32, game_id: i32) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM matches WHERE user_id = $1 AND game_id = $2")
            .bind(user_id)
            .bind(game_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Genres and game ids of every match, for the recommender
    pub async fn liked_games(&self, user_id: i32) -> Result<Vec<LikedGame>, PostgresError> {
        let query = r#"
            SELECT game_id, game_genres, super_liked
            FROM matches
            WHERE user_id = $1
            ORDER BY created_at ASC
        "#;

        let liked = sqlx::query_as::<_, LikedGame>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("User {} has {} matches", user_id, liked.len());

        Ok(liked)
    }

    /// Ten most-matched games across all users
    pub async fn top_matched_games(&self) -> Result<Vec<GameStat>, PostgresError> {
        let query = r#"
            SELECT game_name AS name, COUNT(*) AS count
            FROM matches
            GROUP BY game_name
            ORDER BY count DESC
            LIMIT 10
        "#;

        Ok(sqlx::query_as::<_, GameStat>(query)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Latest matches across users with their owners
    pub async fn recent_matches(&self, limit: i64) -> Result<Vec<MatchWithUser>, PostgresError> {
        let query = r#"
            SELECT m.id, m.user_id, m.game_id, m.game_name, m.game_image, m.game_genres,
                   m.game_rating, m.super_liked, m.created_at,
                   u.name AS user_name, u.email AS user_email
            FROM matches m
            JOIN users u ON m.user_id = u.id
            ORDER BY m.created_at DESC
            LIMIT $1
        "#;

        Ok(sqlx::query_as::<_, MatchWithUser>(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }
}
