use actix_web::{web, HttpResponse};
use crate::error::ApiError;
use crate::models::UpdateProfileRequest;
use crate::routes::{AppState, AuthUser};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(get_profile))
            .route(web::put().to(update_profile)),
    );
}

/// GET /api/profile
async fn get_profile(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    let profile = state.postgres.get_profile(user.id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /api/profile
///
/// Request body: `{ "name": "string" }`
async fn update_profile(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }

    let profile = state.postgres.update_name(user.id, name).await?;

    tracing::info!("User {} updated their profile", user.id);

    Ok(HttpResponse::Ok().json(profile))
}
