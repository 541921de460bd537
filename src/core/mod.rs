// Core algorithm exports
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod tally;

pub use filters::{excluded_tags, is_unowned, pick_ordering, shuffle_with_covers};
pub use recommender::{Recommender, TasteAnalysis, TasteProfile};
pub use scoring::calculate_match_score;
pub use tally::{genre_slug, percentage, GenreTally};
