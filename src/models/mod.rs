// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use catalog::{CatalogGame, CustomGameCard, GameDetails, GamePage, Genre};
pub use domain::{
    CustomGame, GameStat, Group, GroupMessage, LikedGame, MatchedGame, Review, ReviewWithAuthor,
    SavedMatch, User, UserSummary, MatchWithUser,
};
pub use requests::{
    CreateCustomGameRequest, DiscoverQuery, FeedQuery, LoginRequest, MessageRequest,
    RegisterRequest, ReviewRequest, SaveMatchRequest, UpdateProfileRequest, UpdateRoleRequest,
};
pub use responses::{
    AuthResponse, CustomGamesResponse, ErrorResponse, GenresResponse, ScreenshotsResponse,
    UserResponse, GameReviewsResponse, GenreWeight, GroupDetailResponse,
    HealthResponse, MatchesResponse, Recommendation, RecommendationsResponse, ReviewFeedResponse,
    SuccessResponse, MessageResponse,
};
