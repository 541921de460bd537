use super::{PostgresClient, PostgresError};
use crate::models::{CreateCustomGameRequest, CustomGame};

const DEFAULT_CUSTOM_RATING: f64 = 4.0;

impl PostgresClient {
    /// Custom games newest first, with the creator's name
    pub async fn list_custom_games(&self) -> Result<Vec<CustomGame>, PostgresError> {
        let query = r#"
            SELECT cg.id, cg.name, cg.image, cg.genres, cg.rating, cg.description,
                   cg.released, cg.created_by, cg.created_at, u.name AS created_by_name
            FROM custom_games cg
            LEFT JOIN users u ON cg.created_by = u.id
            ORDER BY cg.created_at DESC
        "#;

        Ok(sqlx::query_as::<_, CustomGame>(query)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn create_custom_game(
        &self,
        game: &CreateCustomGameRequest,
        created_by: i32,
    ) -> Result<CustomGame, PostgresError> {
        let query = r#"
            INSERT INTO custom_games (name, image, genres, rating, description, released, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, image, genres, rating, description, released, created_by, created_at
        "#;

        let stored = sqlx::query_as::<_, CustomGame>(query)
            .bind(game.name.trim())
            .bind(&game.image)
            .bind(&game.genres)
            .bind(game.rating.unwrap_or(DEFAULT_CUSTOM_RATING))
            .bind(&game.description)
            .bind(&game.released)
            .bind(created_by)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!("Created custom game {} ({})", stored.id, stored.name);

        Ok(stored)
    }

    pub async fn delete_custom_game(&self, game_id: i32) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM custom_games WHERE id = $1")
            .bind(game_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
