use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use std::future::{ready, Future, Ready};
use std::pin::Pin;
use crate::error::ApiError;
use crate::routes::AppState;
use crate::services::bearer_token;

/// Caller identified by a valid bearer token
///
/// Identity comes from the token claims alone; no database round trip.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
}

/// Caller whose current database role is `admin`
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, ApiError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| ApiError::Internal("application state not configured".to_string()))
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let state = app_state(req)?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| ApiError::Unauthorized("Access token required".to_string()))?;

    let claims = state.auth.verify_token(token).map_err(|e| {
        tracing::debug!("Token verification failed on {}: {}", req.path(), e);
        ApiError::forbidden("Invalid token")
    })?;

    Ok(AuthUser {
        id: claims.user_id,
        email: claims.email,
    })
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = authenticate(req);
        let state = app_state(req);

        Box::pin(async move {
            let user = user?;
            let state = state?;

            match state.postgres.find_user(user.id).await? {
                Some(account) if account.is_admin() => Ok(AdminUser(user)),
                _ => {
                    tracing::info!("Admin access denied for user {}", user.id);
                    Err(ApiError::forbidden("Admin access required"))
                }
            }
        })
    }
}
