use actix_web::{web, HttpResponse};
use crate::core::{TasteAnalysis, TasteProfile};
use crate::error::ApiError;
use crate::models::{CatalogGame, RecommendationsResponse};
use crate::routes::{AppState, AuthUser};
use crate::services::CacheKey;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::get().to(recommendations));
}

/// Genre-weighted recommendations for the caller
///
/// GET /api/recommendations
async fn recommendations(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let liked = state.postgres.liked_games(user.id).await?;

    let profile = match state.recommender.analyze(&liked) {
        TasteAnalysis::NoMatches => {
            return Ok(HttpResponse::Ok().json(RecommendationsResponse::empty(
                "Start swiping to get personalized recommendations!",
            )));
        }
        TasteAnalysis::NoGenres { games_analyzed } => {
            tracing::debug!("User {} has {} matches without genres", user.id, games_analyzed);
            return Ok(HttpResponse::Ok().json(RecommendationsResponse::empty(
                "Not enough genre data to make recommendations",
            )));
        }
        TasteAnalysis::Profile(profile) => profile,
    };

    let pool = candidate_pool(&state, &profile).await;
    let pool_len = pool.len();
    let recommendations = state.recommender.rank(&profile, pool);

    tracing::info!(
        "Recommended {} games for user {} from a pool of {} (genres: {})",
        recommendations.len(),
        user.id,
        pool_len,
        profile.genre_slugs()
    );

    Ok(HttpResponse::Ok().json(RecommendationsResponse {
        recommendations,
        preferences: profile.preferences(),
        message: None,
        total_games_analyzed: Some(profile.games_analyzed),
        top_genres: Some(profile.top_genres),
    }))
}

/// Top-rated catalog games in the profile's genres
///
/// A catalog failure yields an empty pool so the caller still gets
/// their preferences back.
async fn candidate_pool(state: &AppState, profile: &TasteProfile) -> Vec<CatalogGame> {
    let slugs = profile.genre_slugs();
    let page_size = state.recommender.pool_size();
    let key = CacheKey::recommend_pool(&slugs, page_size);

    if let Some(pool) = state.cache.lookup::<Vec<CatalogGame>>(&key).await {
        return pool;
    }

    match state.catalog.games_by_genres(&slugs, page_size).await {
        Ok(pool) => {
            state.cache.store(&key, &pool).await;
            pool
        }
        Err(e) => {
            tracing::warn!("Catalog lookup for genres {} failed: {}", slugs, e);
            Vec::new()
        }
    }
}
