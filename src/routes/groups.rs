use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{GroupDetailResponse, MessageRequest, MessageResponse, ReviewRequest, SuccessResponse};
use crate::routes::{AppState, AuthUser};

const MESSAGE_PAGE: i64 = 100;
const REVIEW_PAGE: i64 = 50;

/// Configure genre group routes
///
/// Literal segments are registered before `/{slug}` so they are not
/// captured as slugs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/groups")
            .route("", web::get().to(list_groups))
            .route("/user/my", web::get().to(my_groups))
            .service(
                web::resource("/messages/{message_id}")
                    .route(web::put().to(edit_message))
                    .route(web::delete().to(delete_message)),
            )
            .route("/{id}/join", web::post().to(join_group))
            .route("/{id}/leave", web::post().to(leave_group))
            .route("/{id}/review", web::post().to(post_group_review))
            .route("/{id}/reviews", web::get().to(group_reviews))
            .service(
                web::resource("/{id}/messages")
                    .route(web::get().to(list_messages))
                    .route(web::post().to(post_message)),
            )
            .route("/{slug}", web::get().to(group_by_slug)),
    );
}

async fn ensure_group(state: &AppState, group_id: i32) -> Result<(), ApiError> {
    if state.postgres.group_exists(group_id).await? {
        Ok(())
    } else {
        Err(ApiError::not_found("Group not found"))
    }
}

async fn ensure_member(state: &AppState, group_id: i32, user_id: i32) -> Result<(), ApiError> {
    if state.postgres.is_member(group_id, user_id).await? {
        Ok(())
    } else {
        Err(ApiError::forbidden("You must join the group first"))
    }
}

/// GET /api/groups
async fn list_groups(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let groups = state.postgres.list_groups().await?;

    Ok(HttpResponse::Ok().json(groups))
}

/// GET /api/groups/user/my
async fn my_groups(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    let groups = state.postgres.user_groups(user.id).await?;

    Ok(HttpResponse::Ok().json(groups))
}

/// Group with its latest reviews
///
/// GET /api/groups/{slug}
async fn group_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let group = state
        .postgres
        .find_group_by_slug(&path)
        .await?
        .ok_or_else(|| ApiError::not_found("Group not found"))?;
    let reviews = state.postgres.group_reviews(group.id, REVIEW_PAGE).await?;

    Ok(HttpResponse::Ok().json(GroupDetailResponse { group, reviews }))
}

/// POST /api/groups/{id}/join
async fn join_group(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let group_id = path.into_inner();
    ensure_group(&state, group_id).await?;

    if state.postgres.join_group(group_id, user.id).await? {
        tracing::info!("User {} joined group {}", user.id, group_id);
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Joined group successfully")))
}

/// POST /api/groups/{id}/leave
async fn leave_group(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let group_id = path.into_inner();
    ensure_group(&state, group_id).await?;

    if state.postgres.leave_group(group_id, user.id).await? {
        tracing::info!("User {} left group {}", user.id, group_id);
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Left group successfully")))
}

/// Review posted inside a group; always public
///
/// POST /api/groups/{id}/review
async fn post_group_review(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
    req: web::Json<ReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    let group_id = path.into_inner();
    req.validate()?;
    ensure_member(&state, group_id, user.id).await?;

    let mut review = req.into_inner();
    review.is_public = true;

    let stored = state.postgres.upsert_review(user.id, &review, Some(group_id)).await?;

    tracing::info!("User {} reviewed game {} in group {}", user.id, stored.game_id, group_id);

    Ok(HttpResponse::Created().json(stored))
}

/// GET /api/groups/{id}/reviews
async fn group_reviews(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let reviews = state
        .postgres
        .group_reviews(path.into_inner(), REVIEW_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(reviews))
}

/// Latest chat messages, newest first
///
/// GET /api/groups/{id}/messages
async fn list_messages(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let messages = state
        .postgres
        .group_messages(path.into_inner(), MESSAGE_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(messages))
}

/// POST /api/groups/{id}/messages
///
/// Request body: `{ "message": "string" }`
async fn post_message(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
    req: web::Json<MessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let group_id = path.into_inner();
    let text = req.text().ok_or_else(|| ApiError::bad_request("Message is required"))?;
    ensure_group(&state, group_id).await?;

    let message = state.postgres.post_message(group_id, user.id, text).await?;

    Ok(HttpResponse::Created().json(message))
}

/// PUT /api/groups/messages/{messageId}
async fn edit_message(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
    req: web::Json<MessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let message_id = path.into_inner();
    let text = req.text().ok_or_else(|| ApiError::bad_request("Message is required"))?;

    let message = state
        .postgres
        .edit_message(message_id, user.id, text)
        .await?
        .ok_or_else(|| ApiError::forbidden("Message not found or not yours"))?;

    Ok(HttpResponse::Ok().json(message))
}

/// DELETE /api/groups/messages/{messageId}
async fn delete_message(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let message_id = path.into_inner();

    if !state.postgres.delete_message(message_id, user.id).await? {
        return Err(ApiError::forbidden("Message not found or not yours"));
    }

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
