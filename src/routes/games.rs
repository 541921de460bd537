use actix_web::{web, HttpResponse};
use crate::core::{excluded_tags, pick_ordering, shuffle_with_covers};
use crate::error::ApiError;
use crate::models::{
    CustomGameCard, CustomGamesResponse, DiscoverQuery, GameDetails, GamePage, Genre,
    GenresResponse, ScreenshotsResponse,
};
use crate::routes::{AppState, AuthUser};
use crate::services::{CacheKey, GameQuery};

const DEFAULT_PAGE_SIZE: u32 = 20;

/// Configure catalog proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/games")
            .route("", web::get().to(custom_games))
            .route("/discover", web::get().to(discover))
            .route("/genres", web::get().to(genres))
            .route("/{id:\\d+}", web::get().to(game_details))
            .route("/{id:\\d+}/screenshots", web::get().to(screenshots)),
    );
}

/// Admin-curated games in feed shape
///
/// GET /api/games
async fn custom_games(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let games: Vec<CustomGameCard> = state
        .postgres
        .list_custom_games()
        .await?
        .into_iter()
        .map(CustomGameCard::from)
        .collect();

    Ok(HttpResponse::Ok().json(CustomGamesResponse { games }))
}

/// One shuffled page of the swipe feed
///
/// GET /api/games/discover?page=1&pageSize=20&genres=action&adult=false
async fn discover(
    state: web::Data<AppState>,
    _user: AuthUser,
    query: web::Query<DiscoverQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();

    // ThreadRng is not Send, keep it out of the await points
    let ordering = pick_ordering(query.ordering.as_deref(), &mut rand::rng());

    let catalog_query = GameQuery {
        page: query.page.unwrap_or(1),
        page_size: query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        genres: query.genres,
        ordering: Some(ordering),
        search: query.search,
        dates: query.dates,
        tags_exclude: Some(excluded_tags(query.adult)),
    };

    let page = state.catalog.fetch_games(&catalog_query).await?;
    let games = shuffle_with_covers(page.games, &mut rand::rng());

    Ok(HttpResponse::Ok().json(GamePage { games, ..page }))
}

/// GET /api/games/genres
async fn genres(state: web::Data<AppState>, _user: AuthUser) -> Result<HttpResponse, ApiError> {
    let key = CacheKey::genres();

    let genres = match state.cache.lookup::<Vec<Genre>>(&key).await {
        Some(genres) => genres,
        None => {
            let genres = state.catalog.fetch_genres().await?;
            state.cache.store(&key, &genres).await;
            genres
        }
    };

    Ok(HttpResponse::Ok().json(GenresResponse { genres }))
}

/// GET /api/games/{id}
async fn game_details(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let key = CacheKey::game(game_id);

    let details = match state.cache.lookup::<GameDetails>(&key).await {
        Some(details) => details,
        None => {
            let details = state.catalog.fetch_game_details(game_id).await?;
            state.cache.store(&key, &details).await;
            details
        }
    };

    Ok(HttpResponse::Ok().json(details))
}

/// Screenshot URLs; an upstream failure yields an empty list
///
/// GET /api/games/{id}/screenshots
async fn screenshots(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    let key = CacheKey::screenshots(game_id);

    let screenshots = match state.cache.lookup::<Vec<String>>(&key).await {
        Some(screenshots) => screenshots,
        None => match state.catalog.fetch_screenshots(game_id).await {
            Ok(screenshots) => {
                state.cache.store(&key, &screenshots).await;
                screenshots
            }
            Err(e) => {
                tracing::warn!("Screenshots for game {} unavailable: {}", game_id, e);
                Vec::new()
            }
        },
    };

    Ok(HttpResponse::Ok().json(ScreenshotsResponse { screenshots }))
}
