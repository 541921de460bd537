use std::collections::{BTreeMap, HashSet};
use crate::config::RecommendationSettings;
use crate::core::{
    filters::is_unowned,
    scoring::calculate_match_score,
    tally::{genre_slug, GenreTally},
};
use crate::models::{CatalogGame, GenreWeight, LikedGame, Recommendation};

/// What the user's matches say about their taste
#[derive(Debug, Clone, PartialEq)]
pub enum TasteAnalysis {
    /// The user has not matched anything yet
    NoMatches,
    /// Matches exist but none of them carry genres
    NoGenres { games_analyzed: usize },
    Profile(TasteProfile),
}

/// Top genres and the ids to keep out of recommendations
#[derive(Debug, Clone, PartialEq)]
pub struct TasteProfile {
    pub top_genres: Vec<GenreWeight>,
    pub games_analyzed: usize,
    pub owned: HashSet<i32>,
}

impl TasteProfile {
    /// Genre name -> share of the user's total genre score
    pub fn preferences(&self) -> BTreeMap<String, u32> {
        self.top_genres
            .iter()
            .map(|g| (g.genre.clone(), g.percentage))
            .collect()
    }

    /// Comma-separated catalog slugs of the top genres
    pub fn genre_slugs(&self) -> String {
        self.top_genres
            .iter()
            .map(|g| genre_slug(&g.genre))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Genre-weighted recommendation engine
///
/// # Pipeline Stages
/// 1. Weighted genre tally over the user's matches
/// 2. Top genres with their share of the total
/// 3. Owned-game filtering of the catalog pool
/// 4. Scoring and ranking
#[derive(Debug, Clone)]
pub struct Recommender {
    settings: RecommendationSettings,
}

impl Recommender {
    pub fn new(settings: RecommendationSettings) -> Self {
        Self { settings }
    }

    pub fn with_default_settings() -> Self {
        Self::new(RecommendationSettings::default())
    }

    /// Catalog page size to request for the candidate pool
    pub fn pool_size(&self) -> u32 {
        self.settings.pool_size
    }

    /// Build the taste profile from the user's matches
    pub fn analyze(&self, liked: &[LikedGame]) -> TasteAnalysis {
        if liked.is_empty() {
            return TasteAnalysis::NoMatches;
        }

        let tally = GenreTally::from_liked(liked, self.settings.super_like_weight);
        if tally.is_empty() {
            return TasteAnalysis::NoGenres {
                games_analyzed: tally.games_analyzed(),
            };
        }

        TasteAnalysis::Profile(TasteProfile {
            top_genres: tally.top(self.settings.top_genres),
            games_analyzed: tally.games_analyzed(),
            owned: liked.iter().map(|g| g.game_id).collect(),
        })
    }

    /// Rank a catalog pool for the given profile
    ///
    /// Owned games are dropped and the pool is cut to `max_results` before
    /// scoring, so the cut follows the catalog's own ordering.
    pub fn rank(&self, profile: &TasteProfile, pool: Vec<CatalogGame>) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = pool
            .into_iter()
            .filter(|game| is_unowned(game, &profile.owned))
            .take(self.settings.max_results)
            .map(|game| {
                let match_score = calculate_match_score(&game.genres, &profile.top_genres);
                Recommendation {
                    id: game.id,
                    name: game.name,
                    image: game.image,
                    rating: game.rating,
                    genres: game.genres,
                    released: game.released,
                    metacritic: game.metacritic,
                    match_score,
                }
            })
            .collect();

        // Stable, so equal scores keep catalog order
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        ranked
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_settings()
    }
}
