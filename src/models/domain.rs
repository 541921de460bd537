use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full account row. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// Account listing used by the profile and admin endpoints
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// A game the user swiped right on
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedMatch {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    pub game_name: String,
    pub game_image: Option<String>,
    pub game_genres: Vec<String>,
    pub game_rating: f64,
    pub super_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Client-facing view of a saved match, keyed by the catalog game id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedGame {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub super_liked: bool,
}

impl From<SavedMatch> for MatchedGame {
    fn from(m: SavedMatch) -> Self {
        Self {
            id: m.game_id,
            name: m.game_name,
            image: m.game_image,
            genres: m.game_genres,
            rating: m.game_rating,
            super_liked: m.super_liked,
        }
    }
}

/// The slice of a match the recommender needs
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LikedGame {
    pub game_id: i32,
    pub game_genres: Vec<String>,
    pub super_liked: bool,
}

/// Admin view of a match with its owner
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchWithUser {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub saved: SavedMatch,
    pub user_name: Option<String>,
    pub user_email: String,
}

/// Most-liked game entry for the admin stats page
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameStat {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    pub game_name: String,
    pub game_image: Option<String>,
    pub rating: i32,
    pub comment: Option<String>,
    pub is_public: bool,
    pub group_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review joined with whichever author columns the query selected
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    pub user_name: Option<String>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Genre-themed community
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub genre: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub member_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    pub id: i32,
    pub group_id: i32,
    pub user_id: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(default)]
    pub user_name: Option<String>,
    #[sqlx(default)]
    pub user_email: Option<String>,
}

/// Admin-curated game served next to catalog results
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CustomGame {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub genres: Vec<String>,
    pub rating: f64,
    pub description: Option<String>,
    pub released: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
}
