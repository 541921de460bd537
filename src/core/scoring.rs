use crate::models::GenreWeight;

/// Score for a game whose genres are unknown
pub const NEUTRAL_SCORE: u8 = 50;
/// Floor every game with known genres starts from
pub const BASE_SCORE: f64 = 30.0;
/// Share of the summed genre percentages added to the base
pub const GENRE_FACTOR: f64 = 0.7;
/// Nothing is ever a perfect match
pub const MAX_SCORE: u8 = 99;

/// Calculate a match score (0-99) for a catalog game
///
/// Scoring formula:
/// score = min(99, round(30 + 0.7 * sum(preference% of each game genre)))
///
/// Only genres present in `preferences` contribute. A game with no genres
/// gets the neutral score of 50.
pub fn calculate_match_score(game_genres: &[String], preferences: &[GenreWeight]) -> u8 {
    if game_genres.is_empty() {
        return NEUTRAL_SCORE;
    }

    let overlap: u32 = game_genres
        .iter()
        .filter_map(|genre| {
            preferences
                .iter()
                .find(|pref| &pref.genre == genre)
                .map(|pref| pref.percentage)
        })
        .sum();

    let score = (BASE_SCORE + overlap as f64 * GENRE_FACTOR).round();
    score.min(MAX_SCORE as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Vec<GenreWeight> {
        vec![
            GenreWeight { genre: "Action".into(), score: 4, percentage: 50 },
            GenreWeight { genre: "RPG".into(), score: 2, percentage: 25 },
            GenreWeight { genre: "Indie".into(), score: 1, percentage: 13 },
        ]
    }

    fn genres(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_no_genres_is_neutral() {
        assert_eq!(calculate_match_score(&[], &prefs()), 50);
    }

    #[test]
    fn test_unrelated_genres_get_base() {
        assert_eq!(calculate_match_score(&genres(&["Racing"]), &prefs()), 30);
    }

    #[test]
    fn test_overlap_is_weighted() {
        // 30 + 0.7 * 50 = 65
        assert_eq!(calculate_match_score(&genres(&["Action"]), &prefs()), 65);
        // 30 + 0.7 * (50 + 25) = 82.5 -> 83
        assert_eq!(calculate_match_score(&genres(&["Action", "RPG", "Racing"]), &prefs()), 83);
    }

    #[test]
    fn test_capped_at_99() {
        let full = vec![GenreWeight { genre: "Action".into(), score: 9, percentage: 100 }];
        assert_eq!(calculate_match_score(&genres(&["Action"]), &full), 99);
    }
}
