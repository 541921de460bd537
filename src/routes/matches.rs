use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{MatchedGame, MatchesResponse, SaveMatchRequest, SuccessResponse};
use crate::routes::{AppState, AuthUser};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/matches")
            .service(
                web::resource("")
                    .route(web::get().to(list_matches))
                    .route(web::post().to(save_match)),
            )
            .route("/{game_id}", web::delete().to(delete_match)),
    );
}

/// Saved matches, newest first
///
/// GET /api/matches
async fn list_matches(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    let matches: Vec<MatchedGame> = state
        .postgres
        .list_matches(user.id)
        .await?
        .into_iter()
        .map(MatchedGame::from)
        .collect();

    tracing::debug!("Loaded {} matches for user {}", matches.len(), user.id);

    Ok(HttpResponse::Ok().json(MatchesResponse { matches }))
}

/// Save a swiped game
///
/// POST /api/matches
///
/// Request body:
/// ```json
/// {
///   "game": {
///     "id": 3328,
///     "name": "string",
///     "image": "string?",
///     "genres": ["string"],
///     "rating": 4.5,
///     "superLiked": false
///   }
/// }
/// ```
///
/// Saving a game twice keeps the first record.
async fn save_match(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<SaveMatchRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let game = MatchedGame::from(req.into_inner().game);
    let inserted = state.postgres.save_match(user.id, &game).await?;

    if inserted {
        tracing::info!(
            "User {} matched game {} (super_liked={})",
            user.id,
            game.id,
            game.super_liked
        );
    } else {
        tracing::debug!("User {} already matched game {}", user.id, game.id);
    }

    Ok(HttpResponse::Created().json(SuccessResponse::ok()))
}

/// DELETE /api/matches/{gameId}
async fn delete_match(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();
    state.postgres.delete_match(user.id, game_id).await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
