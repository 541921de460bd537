//! GameSwipe - Backend service for the GameSwipe game discovery app
//!
//! Accounts, saved matches, reviews, genre groups with chat, an admin
//! surface, and genre-weighted recommendations over the RAWG catalog.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{calculate_match_score, genre_slug, Recommender, TasteAnalysis};
pub use error::ApiError;
pub use models::{CatalogGame, GenreWeight, LikedGame, Recommendation};
