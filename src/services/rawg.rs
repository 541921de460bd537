use crate::models::{CatalogGame, GameDetails, GamePage, Genre};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the game catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,
}

/// Query for one page of catalog games
#[derive(Debug, Clone, Default)]
pub struct GameQuery {
    pub page: u32,
    pub page_size: u32,
    pub genres: Option<String>,
    pub ordering: Option<String>,
    pub search: Option<String>,
    pub dates: Option<String>,
    pub tags_exclude: Option<String>,
}

impl GameQuery {
    /// Query string pairs, skipping unset filters
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.max(1).to_string()),
            ("page_size", self.page_size.clamp(1, 40).to_string()),
        ];

        let optional = [
            ("genres", &self.genres),
            ("ordering", &self.ordering),
            ("search", &self.search),
            ("dates", &self.dates),
            ("tags_exclude", &self.tags_exclude),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        }

        params
    }
}

/// RAWG game catalog client
///
/// Handles all communication with the catalog including:
/// - Paged game listings with filters
/// - Genre list
/// - Game details and screenshots
pub struct RawgClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl RawgClient {
    /// Create a new catalog client
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        if api_key.is_empty() {
            tracing::warn!("Catalog API key is empty; requests will likely be rejected");
        }

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Build a request URL with the API key and the given parameters
    fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{}?key={}",
            self.base_url.trim_end_matches('/'),
            path,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T, CatalogError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url(path, params);
        tracing::debug!("Catalog request: {} {:?}", path, params);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(path.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CatalogError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
                tracing::error!("Catalog request {} failed: {} - {}", path, status, body);
                Err(CatalogError::ApiError(format!("{} returned {}", path, status)))
            }
        }
    }

    /// Fetch one page of games
    pub async fn fetch_games(&self, query: &GameQuery) -> Result<GamePage, CatalogError> {
        let page: RawPage<RawGame> = self.get("/games", &query.params()).await?;

        tracing::debug!("Fetched {} games (total: {})", page.results.len(), page.count);

        Ok(GamePage {
            games: page.results.into_iter().map(CatalogGame::from).collect(),
            count: page.count,
            next: page.next,
            previous: page.previous,
        })
    }

    /// Highest-rated games in the given genre slugs
    pub async fn games_by_genres(
        &self,
        genre_slugs: &str,
        page_size: u32,
    ) -> Result<Vec<CatalogGame>, CatalogError> {
        let query = GameQuery {
            page: 1,
            page_size,
            genres: Some(genre_slugs.to_string()),
            ordering: Some("-rating".to_string()),
            ..GameQuery::default()
        };

        Ok(self.fetch_games(&query).await?.games)
    }

    pub async fn fetch_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let page: RawPage<RawGenre> = self.get("/genres", &[]).await?;

        Ok(page.results.into_iter().map(Genre::from).collect())
    }

    pub async fn fetch_game_details(&self, game_id: i32) -> Result<GameDetails, CatalogError> {
        let raw: RawGameDetails = self.get(&format!("/games/{}", game_id), &[]).await?;

        Ok(GameDetails::from(raw))
    }

    pub async fn fetch_screenshots(&self, game_id: i32) -> Result<Vec<String>, CatalogError> {
        let page: RawPage<RawScreenshot> = self
            .get(&format!("/games/{}/screenshots", game_id), &[])
            .await?;

        Ok(page.results.into_iter().map(|s| s.image).collect())
    }
}

// Wire shapes of the catalog API

#[derive(Debug, Deserialize)]
struct RawPage<T> {
    #[serde(default)]
    count: u64,
    next: Option<String>,
    previous: Option<String>,
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawPlatformEntry {
    platform: Named,
}

#[derive(Debug, Deserialize)]
struct RawGame {
    id: i32,
    name: String,
    background_image: Option<String>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    ratings_count: u32,
    released: Option<String>,
    #[serde(default)]
    genres: Option<Vec<Named>>,
    #[serde(default)]
    platforms: Option<Vec<RawPlatformEntry>>,
    metacritic: Option<i32>,
}

fn names(list: Option<Vec<Named>>) -> Vec<String> {
    list.unwrap_or_default().into_iter().map(|n| n.name).collect()
}

fn platform_names(list: Option<Vec<RawPlatformEntry>>) -> Vec<String> {
    list.unwrap_or_default()
        .into_iter()
        .map(|p| p.platform.name)
        .collect()
}

impl From<RawGame> for CatalogGame {
    fn from(raw: RawGame) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            image: raw.background_image,
            rating: raw.rating,
            rating_count: raw.ratings_count,
            released: raw.released,
            genres: names(raw.genres),
            platforms: platform_names(raw.platforms),
            metacritic: raw.metacritic,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGenre {
    id: i32,
    name: String,
    slug: String,
    #[serde(default)]
    games_count: u64,
    image_background: Option<String>,
}

impl From<RawGenre> for Genre {
    fn from(raw: RawGenre) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            slug: raw.slug,
            games_count: raw.games_count,
            image: raw.image_background,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGameDetails {
    id: i32,
    name: String,
    description_raw: Option<String>,
    description: Option<String>,
    background_image: Option<String>,
    background_image_additional: Option<String>,
    #[serde(default)]
    rating: f64,
    released: Option<String>,
    #[serde(default)]
    genres: Option<Vec<Named>>,
    #[serde(default)]
    platforms: Option<Vec<RawPlatformEntry>>,
    #[serde(default)]
    developers: Option<Vec<Named>>,
    #[serde(default)]
    publishers: Option<Vec<Named>>,
    website: Option<String>,
    metacritic: Option<i32>,
    playtime: Option<u32>,
    esrb_rating: Option<Named>,
}

impl From<RawGameDetails> for GameDetails {
    fn from(raw: RawGameDetails) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description_raw,
            description_html: raw.description,
            image: raw.background_image,
            image_additional: raw.background_image_additional,
            rating: raw.rating,
            released: raw.released,
            genres: names(raw.genres),
            platforms: platform_names(raw.platforms),
            developers: names(raw.developers),
            publishers: names(raw.publishers),
            website: raw.website.filter(|w| !w.is_empty()),
            metacritic: raw.metacritic,
            playtime: raw.playtime,
            esrb_rating: raw.esrb_rating.map(|r| r.name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawScreenshot {
    image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RawgClient {
        RawgClient::new(
            "https://api.rawg.test/api/".to_string(),
            "test key".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_url_includes_key_and_encoded_params() {
        let url = client().url("/games", &[("genres", "action,rpg".to_string())]);
        assert_eq!(
            url,
            "https://api.rawg.test/api/games?key=test%20key&genres=action%2Crpg"
        );
    }

    #[test]
    fn test_query_params_skip_empty_filters() {
        let query = GameQuery {
            page: 0,
            page_size: 100,
            genres: Some(String::new()),
            ordering: Some("-rating".to_string()),
            ..GameQuery::default()
        };

        let params = query.params();
        assert_eq!(params[0], ("page", "1".to_string()));
        assert_eq!(params[1], ("page_size", "40".to_string()));
        assert!(params.iter().all(|(k, _)| *k != "genres"));
        assert!(params.contains(&("ordering", "-rating".to_string())));
    }

    #[test]
    fn test_raw_game_conversion() {
        let raw: RawGame = serde_json::from_value(serde_json::json!({
            "id": 3328,
            "name": "The Witcher 3: Wild Hunt",
            "background_image": "https://media.rawg.io/w3.jpg",
            "rating": 4.66,
            "ratings_count": 6000,
            "released": "2015-05-18",
            "genres": [{"id": 4, "name": "Action"}, {"id": 5, "name": "RPG"}],
            "platforms": [{"platform": {"id": 4, "name": "PC"}}],
            "metacritic": 92
        }))
        .unwrap();

        let game = CatalogGame::from(raw);
        assert_eq!(game.genres, vec!["Action", "RPG"]);
        assert_eq!(game.platforms, vec!["PC"]);
        assert_eq!(game.rating_count, 6000);
    }

    #[test]
    fn test_raw_game_with_null_lists() {
        let raw: RawGame = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Obscure",
            "background_image": null,
            "genres": null,
            "platforms": null
        }))
        .unwrap();

        let game = CatalogGame::from(raw);
        assert!(game.genres.is_empty());
        assert!(game.platforms.is_empty());
        assert!(game.image.is_none());
    }
}
