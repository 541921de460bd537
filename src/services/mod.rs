// Service exports
pub mod auth;
pub mod cache;
pub mod postgres;
pub mod rawg;

pub use auth::{bearer_token, AuthError, AuthService, Claims};
pub use cache::{CacheError, CacheKey, CacheManager, CacheStats};
pub use postgres::{PostgresClient, PostgresError};
pub use rawg::{CatalogError, GameQuery, RawgClient};
