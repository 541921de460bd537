use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{
    FeedQuery, GameReviewsResponse, MessageResponse, ReviewFeedResponse, ReviewRequest,
};
use crate::routes::{AppState, AuthUser};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reviews")
            .route("/feed", web::get().to(feed))
            .route("/game/{game_id}", web::get().to(game_reviews))
            .route("/my", web::get().to(my_reviews))
            .route("", web::post().to(upsert_review))
            .route("/{id}", web::delete().to(delete_review)),
    );
}

/// Number of pages needed for `total` items
fn total_pages(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

/// Public reviews, newest first
///
/// GET /api/reviews/feed?page=1&limit=20
async fn feed(
    state: web::Data<AppState>,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse, ApiError> {
    let (page, limit) = query.normalized();

    let reviews = state.postgres.public_reviews(limit, query.offset()).await?;
    let total = state.postgres.count_public_reviews().await?;

    Ok(HttpResponse::Ok().json(ReviewFeedResponse {
        reviews,
        total,
        page,
        total_pages: total_pages(total, limit),
    }))
}

/// Public reviews of one game with the average rating
///
/// GET /api/reviews/game/{gameId}
async fn game_reviews(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let game_id = path.into_inner();

    let reviews = state.postgres.game_reviews(game_id).await?;
    let (average_rating, total_reviews) = state.postgres.game_rating(game_id).await?;

    Ok(HttpResponse::Ok().json(GameReviewsResponse {
        reviews,
        average_rating,
        total_reviews,
    }))
}

/// GET /api/reviews/my
async fn my_reviews(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    let reviews = state.postgres.user_reviews(user.id).await?;

    Ok(HttpResponse::Ok().json(reviews))
}

/// Create or replace the caller's review of a game
///
/// POST /api/reviews
///
/// Request body:
/// ```json
/// {
///   "gameId": 3328,
///   "gameName": "string",
///   "gameImage": "string?",
///   "rating": 5,
///   "comment": "string?",
///   "isPublic": true
/// }
/// ```
async fn upsert_review(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<ReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let review = state.postgres.upsert_review(user.id, &req, None).await?;

    tracing::info!("User {} reviewed game {} ({}/5)", user.id, review.game_id, review.rating);

    Ok(HttpResponse::Created().json(review))
}

/// DELETE /api/reviews/{id}
async fn delete_review(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let review_id = path.into_inner();

    if !state.postgres.delete_review(review_id, user.id).await? {
        return Err(ApiError::not_found("Review not found or not authorized"));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Review deleted")))
}
