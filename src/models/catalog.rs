use serde::{Deserialize, Serialize};
use crate::models::domain::CustomGame;

/// Game card as shown in the swipe feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGame {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    pub released: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub metacritic: Option<i32>,
}

/// One page of catalog results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePage {
    pub games: Vec<CatalogGame>,
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub games_count: u64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub description_html: Option<String>,
    pub image: Option<String>,
    pub image_additional: Option<String>,
    pub rating: f64,
    pub released: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub website: Option<String>,
    pub metacritic: Option<i32>,
    pub playtime: Option<u32>,
    pub esrb_rating: Option<String>,
}

/// Custom game in the same shape the feed uses for catalog games
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomGameCard {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub rating: f64,
    pub genres: Vec<String>,
    pub released: Option<String>,
    pub is_custom: bool,
}

impl From<CustomGame> for CustomGameCard {
    fn from(game: CustomGame) -> Self {
        Self {
            id: format!("custom_{}", game.id),
            name: game.name,
            image: game.image,
            rating: game.rating,
            genres: game.genres,
            released: game.released,
            is_custom: true,
        }
    }
}
