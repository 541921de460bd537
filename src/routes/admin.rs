use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::domain::{ROLE_ADMIN, ROLE_USER};
use crate::models::{CreateCustomGameRequest, MessageResponse, UpdateRoleRequest};
use crate::routes::{AdminUser, AppState};

const RECENT_MATCHES: i64 = 100;

/// Configure admin routes; every handler requires `AdminUser`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/users", web::get().to(list_users))
            .route("/users/{id}/role", web::put().to(update_role))
            .route("/users/{id}", web::delete().to(delete_user))
            .route("/stats", web::get().to(stats))
            .route("/all-matches", web::get().to(all_matches))
            .service(
                web::resource("/custom-games")
                    .route(web::get().to(list_custom_games))
                    .route(web::post().to(create_custom_game)),
            )
            .route("/custom-games/{id}", web::delete().to(delete_custom_game)),
    );
}

fn is_known_role(role: &str) -> bool {
    role == ROLE_USER || role == ROLE_ADMIN
}

/// GET /api/admin/users
async fn list_users(state: web::Data<AppState>, _admin: AdminUser) -> Result<HttpResponse, ApiError> {
    let users = state.postgres.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// PUT /api/admin/users/{id}/role
///
/// Request body: `{ "role": "user" | "admin" }`
async fn update_role(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<UpdateRoleRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    if !is_known_role(&req.role) {
        return Err(ApiError::bad_request("Invalid role"));
    }

    let user = state.postgres.set_role(user_id, &req.role).await?;

    tracing::info!("Admin {} set role of user {} to {}", admin.0.id, user_id, req.role);

    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /api/admin/users/{id}
async fn delete_user(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    if !state.postgres.delete_user(user_id).await? {
        return Err(ApiError::not_found("User not found"));
    }

    tracing::info!("Admin {} deleted user {}", admin.0.id, user_id);

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted")))
}

/// Most matched games
///
/// GET /api/admin/stats
async fn stats(state: web::Data<AppState>, _admin: AdminUser) -> Result<HttpResponse, ApiError> {
    let top_games = state.postgres.top_matched_games().await?;

    Ok(HttpResponse::Ok().json(top_games))
}

/// GET /api/admin/all-matches
async fn all_matches(state: web::Data<AppState>, _admin: AdminUser) -> Result<HttpResponse, ApiError> {
    let matches = state.postgres.recent_matches(RECENT_MATCHES).await?;

    Ok(HttpResponse::Ok().json(matches))
}

/// GET /api/admin/custom-games
async fn list_custom_games(
    state: web::Data<AppState>,
    _admin: AdminUser,
) -> Result<HttpResponse, ApiError> {
    let games = state.postgres.list_custom_games().await?;

    Ok(HttpResponse::Ok().json(games))
}

/// POST /api/admin/custom-games
async fn create_custom_game(
    state: web::Data<AppState>,
    admin: AdminUser,
    req: web::Json<CreateCustomGameRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut req = req.into_inner();
    req.normalize();
    req.validate()?;

    let game = state.postgres.create_custom_game(&req, admin.0.id).await?;

    tracing::info!("Admin {} added custom game {}", admin.0.id, game.id);

    Ok(HttpResponse::Created().json(game))
}

/// DELETE /api/admin/custom-games/{id}
async fn delete_custom_game(
    state: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    if !state.postgres.delete_custom_game(path.into_inner()).await? {
        return Err(ApiError::not_found("Custom game not found"));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Custom game deleted")))
}
