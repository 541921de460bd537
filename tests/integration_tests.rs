// Integration tests for the GameSwipe recommendation pipeline

use gameswipe::config::RecommendationSettings;
use gameswipe::core::{Recommender, TasteAnalysis, TasteProfile};
use gameswipe::models::{CatalogGame, LikedGame};

fn liked(game_id: i32, genres: &[&str], super_liked: bool) -> LikedGame {
    LikedGame {
        game_id,
        game_genres: genres.iter().map(|g| g.to_string()).collect(),
        super_liked,
    }
}

fn catalog_game(id: i32, genres: &[&str]) -> CatalogGame {
    CatalogGame {
        id,
        name: format!("Game {}", id),
        image: Some(format!("https://media.rawg.io/{}.jpg", id)),
        rating: 4.0,
        rating_count: 100,
        released: Some("2020-01-01".to_string()),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        platforms: vec!["PC".to_string()],
        metacritic: None,
    }
}

fn profile_of(recommender: &Recommender, history: &[LikedGame]) -> TasteProfile {
    match recommender.analyze(history) {
        TasteAnalysis::Profile(profile) => profile,
        other => panic!("expected a taste profile, got {:?}", other),
    }
}

fn history() -> Vec<LikedGame> {
    vec![
        liked(10, &["Action", "RPG"], true),
        liked(11, &["Action", "Shooter"], false),
        liked(12, &["Puzzle"], false),
    ]
}

#[test]
fn test_integration_end_to_end_recommendations() {
    let recommender = Recommender::with_default_settings();
    let profile = profile_of(&recommender, &history());

    // Action 3, RPG 2, Shooter 1, Puzzle 1 (total 7)
    let top: Vec<_> = profile
        .top_genres
        .iter()
        .map(|g| (g.genre.as_str(), g.score, g.percentage))
        .collect();
    assert_eq!(top, vec![("Action", 3, 43), ("RPG", 2, 29), ("Shooter", 1, 14)]);
    assert_eq!(profile.games_analyzed, 3);
    assert_eq!(profile.genre_slugs(), "action,rpg,shooter");

    let pool = vec![
        catalog_game(10, &["Action", "RPG"]),
        catalog_game(20, &["Action", "RPG"]),
        catalog_game(21, &[]),
        catalog_game(22, &["Puzzle"]),
        catalog_game(23, &["Action", "RPG", "Shooter"]),
        catalog_game(24, &["Action"]),
    ];

    let ranked = recommender.rank(&profile, pool);
    let scores: Vec<_> = ranked.iter().map(|r| (r.id, r.match_score)).collect();

    assert_eq!(scores, vec![(23, 90), (20, 80), (24, 60), (21, 50), (22, 30)]);
}

#[test]
fn test_integration_preferences_cover_top_genres_only() {
    let recommender = Recommender::with_default_settings();
    let profile = profile_of(&recommender, &history());

    let preferences = profile.preferences();
    assert_eq!(preferences.len(), 3);
    assert_eq!(preferences.get("Action"), Some(&43));
    assert!(!preferences.contains_key("Puzzle"));
}

#[test]
fn test_integration_owned_games_never_recommended() {
    let recommender = Recommender::with_default_settings();
    let profile = profile_of(&recommender, &history());

    let pool: Vec<_> = (10..15).map(|id| catalog_game(id, &["Action"])).collect();
    let ranked = recommender.rank(&profile, pool);

    let ids: Vec<_> = ranked.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![13, 14]);
}

#[test]
fn test_integration_results_are_capped() {
    let recommender = Recommender::with_default_settings();
    let profile = profile_of(&recommender, &history());

    let pool: Vec<_> = (100..130).map(|id| catalog_game(id, &["Action"])).collect();
    let ranked = recommender.rank(&profile, pool);

    assert_eq!(ranked.len(), 15);
    // Equal scores keep the catalog's order, so the cut is the first 15
    assert_eq!(ranked.first().map(|r| r.id), Some(100));
    assert_eq!(ranked.last().map(|r| r.id), Some(114));
}

#[test]
fn test_integration_single_genre_taste_caps_at_99() {
    let recommender = Recommender::with_default_settings();
    let profile = profile_of(&recommender, &[liked(1, &["Strategy"], false)]);

    let ranked = recommender.rank(&profile, vec![catalog_game(2, &["Strategy"])]);

    assert_eq!(profile.top_genres[0].percentage, 100);
    assert_eq!(ranked[0].match_score, 99);
}

#[test]
fn test_integration_super_like_weight_is_configurable() {
    let recommender = Recommender::new(RecommendationSettings {
        super_like_weight: 5,
        ..RecommendationSettings::default()
    });
    let history = vec![
        liked(1, &["Indie"], false),
        liked(2, &["Indie"], false),
        liked(3, &["Racing"], true),
    ];

    let profile = profile_of(&recommender, &history);

    assert_eq!(profile.top_genres[0].genre, "Racing");
    assert_eq!(profile.top_genres[0].score, 5);
}

#[test]
fn test_integration_empty_histories() {
    let recommender = Recommender::with_default_settings();

    assert_eq!(recommender.analyze(&[]), TasteAnalysis::NoMatches);
    assert_eq!(
        recommender.analyze(&[liked(1, &[], true), liked(2, &[], false)]),
        TasteAnalysis::NoGenres { games_analyzed: 2 }
    );
}
