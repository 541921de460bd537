// Route exports
pub mod admin;
pub mod auth;
pub mod extract;
pub mod games;
pub mod groups;
pub mod health;
pub mod matches;
pub mod profile;
pub mod recommendations;
pub mod reviews;

use actix_web::web;
use std::sync::Arc;
use crate::core::Recommender;
use crate::services::{AuthService, CacheManager, PostgresClient, RawgClient};

pub use extract::{AdminUser, AuthUser};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub catalog: Arc<RawgClient>,
    pub cache: Arc<CacheManager>,
    pub auth: Arc<AuthService>,
    pub recommender: Recommender,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure).service(
        web::scope("/api")
            .configure(auth::configure)
            .configure(profile::configure)
            .configure(matches::configure)
            .configure(reviews::configure)
            .configure(groups::configure)
            .configure(recommendations::configure)
            .configure(games::configure)
            .configure(admin::configure),
    );
}
