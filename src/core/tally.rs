use crate::models::{GenreWeight, LikedGame};

/// Weighted genre counts over a user's matches, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreTally {
    scores: Vec<(String, u32)>,
    games_analyzed: usize,
}

impl GenreTally {
    /// Count every genre of every liked game.
    ///
    /// Each game adds `super_like_weight` to its genres when super liked,
    /// otherwise 1.
    pub fn from_liked(liked: &[LikedGame], super_like_weight: u32) -> Self {
        let mut tally = Self::default();

        for game in liked {
            let weight = if game.super_liked { super_like_weight } else { 1 };
            for genre in &game.game_genres {
                tally.add(genre, weight);
            }
            tally.games_analyzed += 1;
        }

        tally
    }

    fn add(&mut self, genre: &str, weight: u32) {
        match self.scores.iter_mut().find(|(name, _)| name == genre) {
            Some((_, score)) => *score += weight,
            None => self.scores.push((genre.to_string(), weight)),
        }
    }

    pub fn games_analyzed(&self) -> usize {
        self.games_analyzed
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum over all genres, not only the top ones
    pub fn total_score(&self) -> u32 {
        self.scores.iter().map(|(_, score)| score).sum()
    }

    pub fn score_of(&self, genre: &str) -> Option<u32> {
        self.scores
            .iter()
            .find(|(name, _)| name == genre)
            .map(|(_, score)| *score)
    }

    /// Highest-scoring genres with their share of the total.
    ///
    /// Ties keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<GenreWeight> {
        let total = self.total_score();
        let mut sorted = self.scores.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));

        sorted
            .into_iter()
            .take(n)
            .map(|(genre, score)| GenreWeight {
                genre,
                score,
                percentage: percentage(score, total),
            })
            .collect()
    }
}

/// Rounded share of `score` in `total`, 0..=100
#[inline]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

/// Catalog slug for a genre name ("Massively Multiplayer" -> "massively-multiplayer")
pub fn genre_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
