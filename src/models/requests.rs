use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::MatchedGame;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[serde(default)]
    pub password: String,
    pub name: Option<String>,
}

impl RegisterRequest {
    /// Explicit name, or the local part of the email
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.email.split('@').next().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: String,
}

/// Request to save a swiped game
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveMatchRequest {
    #[validate(nested)]
    pub game: MatchedGameInput,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchedGameInput {
    #[validate(range(min = 1, message = "game id is required"))]
    pub id: i32,
    #[validate(length(min = 1, message = "game name is required"))]
    pub name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "super_liked", rename = "superLiked")]
    pub super_liked: bool,
}

impl From<MatchedGameInput> for MatchedGame {
    fn from(input: MatchedGameInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
            image: input.image,
            genres: input.genres,
            rating: input.rating.unwrap_or(0.0),
            super_liked: input.super_liked,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl FeedQuery {
    /// Page clamped to >= 1 and limit to 1..=100
    pub fn normalized(&self) -> (i64, i64) {
        (self.page.max(1), self.limit.clamp(1, 100))
    }

    /// Rows to skip; saturates for absurd page numbers, which yields an empty page
    pub fn offset(&self) -> i64 {
        let (page, limit) = self.normalized();
        (page - 1).saturating_mul(limit)
    }
}

fn default_page() -> i64 { 1 }
fn default_limit() -> i64 { 20 }

/// Create or update a review
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 1, message = "gameId is required"))]
    #[serde(alias = "game_id", rename = "gameId")]
    pub game_id: i32,
    #[validate(length(min = 1, message = "gameName is required"))]
    #[serde(alias = "game_name", rename = "gameName")]
    pub game_name: String,
    #[serde(alias = "game_image", rename = "gameImage", default)]
    pub game_image: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(alias = "is_public", rename = "isPublic", default = "default_true")]
    pub is_public: bool,
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: String,
}

impl MessageRequest {
    /// Trimmed message, or None when blank
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.message.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCustomGameRequest {
    #[validate(length(min = 1, message = "name is required"))]
    #[serde(default)]
    pub name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub released: Option<String>,
}

impl CreateCustomGameRequest {
    /// Trim the name so a blank one fails validation
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
    }
}

/// Catalog discovery filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub genres: Option<String>,
    pub ordering: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub adult: bool,
    pub dates: Option<String>,
}
