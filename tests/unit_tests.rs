// Unit tests for the GameSwipe core functions

use gameswipe::core::{
    calculate_match_score, excluded_tags, genre_slug, is_unowned, percentage, pick_ordering,
    shuffle_with_covers, GenreTally,
};
use gameswipe::core::filters::{ADULT_TAGS, EXCLUDED_TAGS};
use gameswipe::models::{CatalogGame, GenreWeight, LikedGame};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn weight(genre: &str, percentage: u32) -> GenreWeight {
    GenreWeight {
        genre: genre.to_string(),
        score: 0,
        percentage,
    }
}

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|g| g.to_string()).collect()
}

fn game(id: i32, image: Option<&str>) -> CatalogGame {
    CatalogGame {
        id,
        name: format!("Game {}", id),
        image: image.map(str::to_string),
        rating: 3.5,
        rating_count: 10,
        released: None,
        genres: Vec::new(),
        platforms: Vec::new(),
        metacritic: None,
    }
}

#[test]
fn test_match_score_neutral_without_genres() {
    assert_eq!(calculate_match_score(&[], &[weight("Action", 60)]), 50);
}

#[test]
fn test_match_score_base_without_overlap() {
    assert_eq!(calculate_match_score(&genres(&["Puzzle"]), &[weight("Action", 60)]), 30);
}

#[test]
fn test_match_score_sums_overlapping_genres() {
    let prefs = vec![weight("Action", 50), weight("RPG", 30), weight("Indie", 20)];

    // 30 + 0.7 * 80 = 86
    assert_eq!(calculate_match_score(&genres(&["Action", "RPG", "Sports"]), &prefs), 86);
}

#[test]
fn test_match_score_rounds_to_nearest() {
    // 30 + 0.7 * 33 = 53.1
    assert_eq!(calculate_match_score(&genres(&["Action"]), &[weight("Action", 33)]), 53);
    // 30 + 0.7 * 38 = 56.6
    assert_eq!(calculate_match_score(&genres(&["Action"]), &[weight("Action", 38)]), 57);
}

#[test]
fn test_match_score_capped() {
    assert_eq!(calculate_match_score(&genres(&["Action"]), &[weight("Action", 100)]), 99);
}

#[test]
fn test_percentage() {
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(5, 5), 100);
    assert_eq!(percentage(0, 0), 0);
}

#[test]
fn test_genre_slug_collapses_any_whitespace() {
    assert_eq!(genre_slug("Board\tGames"), "board-games");
    assert_eq!(genre_slug("Massively\nMultiplayer"), "massively-multiplayer");
    assert_eq!(genre_slug("   "), "");
}

#[test]
fn test_tally_weights_and_tie_order() {
    let liked = vec![
        LikedGame {
            game_id: 1,
            game_genres: genres(&["Indie", "Adventure"]),
            super_liked: false,
        },
        LikedGame {
            game_id: 2,
            game_genres: genres(&["Adventure", "Platformer"]),
            super_liked: true,
        },
    ];

    let tally = GenreTally::from_liked(&liked, 2);

    assert_eq!(tally.games_analyzed(), 2);
    assert_eq!(tally.total_score(), 6);
    assert_eq!(tally.score_of("Adventure"), Some(3));

    let top: Vec<_> = tally.top(2).into_iter().map(|g| g.genre).collect();
    assert_eq!(top, vec!["Adventure", "Platformer"]);
}

#[test]
fn test_tally_ties_keep_first_seen_order() {
    let liked = vec![LikedGame {
        game_id: 1,
        game_genres: genres(&["Strategy", "Casual", "Arcade", "Family"]),
        super_liked: false,
    }];

    let top: Vec<_> = GenreTally::from_liked(&liked, 2)
        .top(3)
        .into_iter()
        .map(|g| (g.genre, g.percentage))
        .collect();

    assert_eq!(
        top,
        vec![
            ("Strategy".to_string(), 25),
            ("Casual".to_string(), 25),
            ("Arcade".to_string(), 25),
        ]
    );
}

#[test]
fn test_match_score_genre_names_are_case_sensitive() {
    // Catalog genre names are matched verbatim
    assert_eq!(calculate_match_score(&genres(&["action"]), &[weight("Action", 60)]), 30);
}

#[test]
fn test_tally_top_handles_short_and_empty_requests() {
    let liked = vec![LikedGame {
        game_id: 1,
        game_genres: genres(&["Racing", "Sports"]),
        super_liked: false,
    }];
    let tally = GenreTally::from_liked(&liked, 2);

    assert_eq!(tally.top(10).len(), 2);
    assert!(tally.top(0).is_empty());
    assert_eq!(tally.score_of("Puzzle"), None);
}

#[test]
fn test_excluded_tags_list_each_tag_once() {
    for adult in [false, true] {
        let tags = excluded_tags(adult);
        let listed: Vec<&str> = tags.split(',').collect();
        let unique: HashSet<&str> = listed.iter().copied().collect();

        assert_eq!(listed.len(), unique.len());
        let expected = if adult {
            EXCLUDED_TAGS.len()
        } else {
            EXCLUDED_TAGS.len() + ADULT_TAGS.len()
        };
        assert_eq!(listed.len(), expected);
    }
}

#[test]
fn test_pick_ordering_trims_requested_value() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(pick_ordering(Some("  -added "), &mut rng), "-added");
}

#[test]
fn test_shuffle_same_seed_same_order() {
    let page: Vec<CatalogGame> = (1..=20)
        .map(|id| game(id, Some("https://media.rawg.io/cover.jpg")))
        .collect();

    let first: Vec<i32> = shuffle_with_covers(page.clone(), &mut StdRng::seed_from_u64(9))
        .into_iter()
        .map(|g| g.id)
        .collect();
    let second: Vec<i32> = shuffle_with_covers(page, &mut StdRng::seed_from_u64(9))
        .into_iter()
        .map(|g| g.id)
        .collect();

    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(sorted, (1..=20).collect::<Vec<_>>());
}

#[test]
fn test_unowned_filter_over_a_page() {
    let owned: HashSet<i32> = [2, 4].into_iter().collect();
    let kept: Vec<i32> = (1..=5)
        .map(|id| game(id, None))
        .filter(|g| is_unowned(g, &owned))
        .map(|g| g.id)
        .collect();

    assert_eq!(kept, vec![1, 3, 5]);
}
