use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::domain::ROLE_USER;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::routes::{AppState, AuthUser};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(me)),
    );
}

/// Emails are compared case-insensitively
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Register endpoint
///
/// POST /api/auth/register
///
/// Request body:
/// ```json
/// { "email": "string", "password": "string", "name": "string?" }
/// ```
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut req = req.into_inner();
    req.email = normalize_email(&req.email);
    req.validate()?;

    if state.postgres.find_user_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let auth = state.auth.clone();
    let password = req.password.clone();
    let password_hash = web::block(move || auth.hash_password(&password)).await??;

    let user = state
        .postgres
        .create_user(&req.email, &password_hash, &req.display_name(), ROLE_USER)
        .await?;
    let token = state.auth.issue_token(&user)?;

    tracing::info!("Registered user {}", user.id);

    Ok(HttpResponse::Created().json(AuthResponse { user, token }))
}

/// Login endpoint
///
/// POST /api/auth/login
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut req = req.into_inner();
    req.email = normalize_email(&req.email);
    req.validate()?;

    let invalid = || ApiError::Unauthorized("Invalid credentials".to_string());

    let user = state
        .postgres
        .find_user_by_email(&req.email)
        .await?
        .ok_or_else(invalid)?;

    let auth = state.auth.clone();
    let password = req.password;
    let hash = user.password_hash.clone();
    let valid = web::block(move || auth.verify_password(&password, &hash)).await?;

    if !valid {
        tracing::info!("Failed login for user {}", user.id);
        return Err(invalid());
    }

    let token = state.auth.issue_token(&user)?;

    Ok(HttpResponse::Ok().json(AuthResponse { user, token }))
}

/// Current user
///
/// GET /api/auth/me
async fn me(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    let account = state
        .postgres
        .find_user(user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(UserResponse { user: account }))
}
