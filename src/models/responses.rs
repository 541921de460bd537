use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::catalog::{CustomGameCard, Genre};
use crate::models::domain::{Group, MatchedGame, ReviewWithAuthor, User};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cache_entries: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Current account, without a fresh token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomGamesResponse {
    pub games: Vec<CustomGameCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenresResponse {
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotsResponse {
    pub screenshots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchedGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFeedResponse {
    pub reviews: Vec<ReviewWithAuthor>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReviewsResponse {
    pub reviews: Vec<ReviewWithAuthor>,
    pub average_rating: f64,
    pub total_reviews: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetailResponse {
    #[serde(flatten)]
    pub group: Group,
    pub reviews: Vec<ReviewWithAuthor>,
}

/// One of the user's strongest genres
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreWeight {
    pub genre: String,
    pub score: u32,
    pub percentage: u32,
}

/// Catalog game scored against the user's genre preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub rating: f64,
    pub genres: Vec<String>,
    pub released: Option<String>,
    pub metacritic: Option<i32>,
    pub match_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    pub preferences: BTreeMap<String, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_games_analyzed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_genres: Option<Vec<GenreWeight>>,
}

impl RecommendationsResponse {
    /// Empty result with a hint for the client
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            recommendations: Vec::new(),
            preferences: BTreeMap::new(),
            message: Some(message.into()),
            total_games_analyzed: None,
            top_genres: None,
        }
    }
}
