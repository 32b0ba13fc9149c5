// Unit tests for the OSAA long-haul analysis

use osaa_longhaul::core::{
    distance::haversine_distance,
    filters::{is_long_haul, matches_filter},
    locations::{primary_school, LocationTable},
    tier::TierThresholds,
    turnaround::{average, percentage, TeamEntries, TeamKey, TurnaroundReport},
};
use osaa_longhaul::models::{AnnotatedGame, Division, GameFilter, Matchup, Sport, Tier};

fn create_game(year: u16, division: Division, round: &str, team1: &str, team2: &str, distance: f64) -> AnnotatedGame {
    AnnotatedGame {
        matchup: Matchup::new(year, Sport::Baseball, division, round, team1, team2),
        distance_miles: Some(distance),
        tier: Tier::classify(Some(distance)),
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(45.5152, -122.6784, 45.5152, -122.6784);
    assert!(distance < 0.01);
}

#[test]
fn test_haversine_distance_portland_to_ontario() {
    // Portland to Ontario is roughly 300 miles in a straight line
    let distance = haversine_distance(45.5152, -122.6784, 44.0265, -116.9629);
    assert!(distance > 280.0 && distance < 310.0);
}

#[test]
fn test_haversine_is_symmetric() {
    let there = haversine_distance(44.5646, -123.2620, 45.6721, -118.7886);
    let back = haversine_distance(45.6721, -118.7886, 44.5646, -123.2620);
    assert!((there - back).abs() < 1e-9);
}

#[test]
fn test_tier_boundaries_are_inclusive() {
    let thresholds = TierThresholds::default();

    assert_eq!(thresholds.classify(Some(95.0)), Tier::Green);
    assert_eq!(thresholds.classify(Some(119.0)), Tier::Green);
    assert_eq!(thresholds.classify(Some(119.01)), Tier::Yellow);
    assert_eq!(thresholds.classify(Some(249.0)), Tier::Yellow);
    assert_eq!(thresholds.classify(Some(249.01)), Tier::Red);
    assert_eq!(thresholds.classify(None), Tier::Unknown);
}

#[test]
fn test_custom_tier_thresholds() {
    let thresholds = TierThresholds::new(150.0, 300.0);
    assert_eq!(thresholds.classify(Some(140.0)), Tier::Green);
    assert_eq!(thresholds.classify(Some(280.0)), Tier::Yellow);
}

#[test]
fn test_long_haul_threshold() {
    assert!(is_long_haul(Some(95.0), 95.0));
    assert!(!is_long_haul(Some(94.99), 95.0));
    assert!(!is_long_haul(None, 95.0));
    assert!(!is_long_haul(None, 0.0));
}

#[test]
fn test_coop_names_use_primary_school() {
    assert_eq!(primary_school("Grant Union / Prairie City"), "Grant Union");
    assert_eq!(primary_school("Pendleton"), "Pendleton");

    let table = LocationTable::new();
    let coop = table.lookup("Grant Union / Prairie City").unwrap();
    let grant = table.lookup("Grant Union").unwrap();
    assert_eq!(coop.latitude, grant.latitude);
    assert_eq!(coop.longitude, grant.longitude);
}

#[test]
fn test_unknown_school() {
    let table = LocationTable::new();
    assert!(table.lookup("Nowhere Academy").is_none());
    assert!(!table.contains("Nowhere Academy"));
}

#[test]
fn test_filter_by_division_and_round() {
    let game = create_game(2024, Division::FourA, "Quarterfinals", "Philomath", "Ontario", 260.0);

    let mut filter = GameFilter {
        division: Some(Division::FourA),
        ..Default::default()
    };
    assert!(matches_filter(&game, &filter));

    filter.round = Some("First Round".to_string());
    assert!(!matches_filter(&game, &filter));

    filter.round = None;
    filter.tier = Some(Tier::Red);
    assert!(matches_filter(&game, &filter));
}

#[test]
fn test_zero_safe_rollup_helpers() {
    assert_eq!(percentage(0, 0), 0.0);
    assert_eq!(percentage(1, 4), 25.0);
    assert_eq!(average(0.0, 0), 0.0);
    assert_eq!(average(300.0, 2), 150.0);
}

#[test]
fn test_team_entries_track_home_and_away() {
    let games = vec![
        create_game(2024, Division::FiveA, "First Round", "Summit", "Pendleton", 200.0),
        create_game(2024, Division::FiveA, "Quarterfinals", "Pendleton", "Churchill", 230.0),
    ];

    let entries = TeamEntries::from_games(&games);
    assert_eq!(entries.len(), 3);

    let key = TeamKey {
        team: "Pendleton".to_string(),
        year: 2024,
        sport: Sport::Baseball,
        division: Division::FiveA,
    };
    let pendleton = entries.get(&key).unwrap();

    assert!(pendleton.is_multi_game());
    assert_eq!(pendleton.total_miles(), 430.0);
    assert_eq!(pendleton.away_miles(), 200.0);
    assert!(!pendleton.games[0].is_home);
    assert!(pendleton.games[1].is_home);
    assert_eq!(pendleton.games[1].opponent, "Churchill");
}

#[test]
fn test_report_on_no_entries() {
    let report = TurnaroundReport::from_entries(&TeamEntries::from_games(&[]));

    assert_eq!(report.total_appearances, 0);
    assert_eq!(report.burden_percentage(), 0.0);
    assert_eq!(report.avg_miles_per_team(), 0.0);
    assert!(report.worst_cases.is_empty());
    assert_eq!(report.division_rows().len(), 5);
}
