use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use crate::models::CatalogGame;

/// Tags hidden from the feed regardless of settings
pub const EXCLUDED_TAGS: &[&str] = &[
    "anime",
    "visual-novel",
    "jrpg",
    "otome",
    "dating-sim",
    "gacha",
    "mobile-game",
];

/// Tags hidden unless the user opted into adult content
pub const ADULT_TAGS: &[&str] = &["nudity", "sexual-content", "hentai", "nsfw"];

/// Orderings picked from when the client asks for none
pub const FEED_ORDERINGS: &[&str] = &["-rating", "-released", "-added", "-metacritic", "name"];

/// Comma-separated tag exclusion list for a feed request
pub fn excluded_tags(adult: bool) -> String {
    let mut tags: Vec<&str> = EXCLUDED_TAGS.to_vec();
    if !adult {
        tags.extend_from_slice(ADULT_TAGS);
    }
    tags.join(",")
}

/// Requested ordering, or a random one for variety
pub fn pick_ordering<R: Rng + ?Sized>(requested: Option<&str>, rng: &mut R) -> String {
    match requested.map(str::trim) {
        Some(ordering) if !ordering.is_empty() => ordering.to_string(),
        _ => FEED_ORDERINGS[rng.random_range(0..FEED_ORDERINGS.len())].to_string(),
    }
}

/// Shuffle a page of results and drop games without a cover image
pub fn shuffle_with_covers<R: Rng + ?Sized>(mut games: Vec<CatalogGame>, rng: &mut R) -> Vec<CatalogGame> {
    games.shuffle(rng);
    games.retain(has_cover);
    games
}

#[inline]
pub fn has_cover(game: &CatalogGame) -> bool {
    game.image.as_deref().is_some_and(|url| !url.is_empty())
}

/// Check that the user has not already matched this game
#[inline]
pub fn is_unowned(game: &CatalogGame, owned: &HashSet<i32>) -> bool {
    !owned.contains(&game.id)
}
