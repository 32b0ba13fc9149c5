use std::collections::BTreeSet;

use crate::core::{
    distance::distance_between,
    filters::{is_long_haul, MIN_DISTANCE_MILES},
    locations::LocationTable,
    tier::TierThresholds,
};
use crate::models::{AnnotatedGame, Matchup};

/// Result of annotating a batch of matchups
#[derive(Debug, Default)]
pub struct AnnotationResult {
    /// Long-haul games, in input order
    pub games: Vec<AnnotatedGame>,
    pub total_matchups: usize,
    /// Matchups dropped because a school could not be located
    pub unresolved: usize,
    /// Matchups dropped for falling under the long-haul threshold
    pub below_threshold: usize,
    /// Distinct team names that could not be located
    pub unresolved_teams: BTreeSet<String>,
}

/// Distance annotation pipeline
///
/// # Pipeline Stages
/// 1. Resolve both schools in the location table
/// 2. Haversine distance between them
/// 3. Long-haul threshold filter
/// 4. Tier classification
#[derive(Debug, Clone)]
pub struct Annotator {
    locations: LocationTable,
    thresholds: TierThresholds,
    min_distance: f64,
}

impl Annotator {
    pub fn new(locations: LocationTable, thresholds: TierThresholds, min_distance: f64) -> Self {
        Self {
            locations,
            thresholds,
            min_distance,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(LocationTable::new(), TierThresholds::default(), MIN_DISTANCE_MILES)
    }

    pub fn locations(&self) -> &LocationTable {
        &self.locations
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Distance in miles between two teams, or `None` if either is unknown
    pub fn distance(&self, team1: &str, team2: &str) -> Option<f64> {
        let school1 = self.locations.lookup(team1)?;
        let school2 = self.locations.lookup(team2)?;
        Some(distance_between(school1, school2))
    }

    /// Annotate a single matchup without applying the long-haul filter
    pub fn annotate(&self, matchup: Matchup) -> AnnotatedGame {
        let distance_miles = self.distance(&matchup.team1, &matchup.team2);
        let tier = self.thresholds.classify(distance_miles);

        AnnotatedGame {
            matchup,
            distance_miles,
            tier,
        }
    }

    /// Annotate all matchups and keep only the long-haul games
    ///
    /// Unresolvable matchups are counted and dropped, never failed.
    pub fn annotate_all(&self, matchups: Vec<Matchup>) -> AnnotationResult {
        let mut result = AnnotationResult {
            total_matchups: matchups.len(),
            ..Default::default()
        };

        for matchup in matchups {
            let game = self.annotate(matchup);

            match game.distance_miles {
                None => {
                    for team in [&game.matchup.team1, &game.matchup.team2] {
                        if !self.locations.contains(team) {
                            result.unresolved_teams.insert(team.clone());
                        }
                    }
                    result.unresolved += 1;
                }
                distance if !is_long_haul(distance, self.min_distance) => {
                    result.below_threshold += 1;
                }
                _ => result.games.push(game),
            }
        }

        tracing::debug!(
            "Annotated {} matchups: {} long-haul, {} below threshold, {} unresolved",
            result.total_matchups,
            result.games.len(),
            result.below_threshold,
            result.unresolved
        );

        result
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Division, Sport, Tier};

    fn create_matchup(team1: &str, team2: &str) -> Matchup {
        Matchup::new(2024, Sport::Baseball, Division::FiveA, "First Round", team1, team2)
    }

    #[test]
    fn test_annotate_long_haul_game() {
        let annotator = Annotator::with_defaults();
        let game = annotator.annotate(create_matchup("Crescent Valley", "Pendleton"));

        let distance = game.distance_miles.unwrap();
        assert!((distance - 230.0).abs() < 2.0);
        assert_eq!(game.tier, Tier::Yellow);
    }

    #[test]
    fn test_unknown_school_gives_no_distance() {
        let annotator = Annotator::with_defaults();

        assert_eq!(annotator.distance("Hogwarts", "Pendleton"), None);
        assert_eq!(annotator.distance("Pendleton", "Hogwarts"), None);

        let game = annotator.annotate(create_matchup("Hogwarts", "Pendleton"));
        assert_eq!(game.distance_miles, None);
        assert_eq!(game.tier, Tier::Unknown);
    }

    #[test]
    fn test_distance_symmetric() {
        let annotator = Annotator::with_defaults();
        let there = annotator.distance("Joseph", "Bandon").unwrap();
        let back = annotator.distance("Bandon", "Joseph").unwrap();
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_annotate_all_filters_and_counts() {
        let annotator = Annotator::with_defaults();
        let matchups = vec![
            create_matchup("Crescent Valley", "Pendleton"), // ~230 mi
            create_matchup("Jesuit", "Sunset"),             // a few miles
            create_matchup("Hogwarts", "Pendleton"),        // unknown
            create_matchup("Summit", "Pendleton"),          // ~170 mi
        ];

        let result = annotator.annotate_all(matchups);

        assert_eq!(result.total_matchups, 4);
        assert_eq!(result.games.len(), 2);
        assert_eq!(result.below_threshold, 1);
        assert_eq!(result.unresolved, 1);
        assert!(result.unresolved_teams.contains("Hogwarts"));
        assert!(!result.unresolved_teams.contains("Pendleton"));
        assert_eq!(result.games[0].matchup.team1, "Crescent Valley");
        assert_eq!(result.games[1].matchup.team1, "Summit");
    }

    #[test]
    fn test_annotate_all_empty() {
        let result = Annotator::with_defaults().annotate_all(vec![]);
        assert_eq!(result.total_matchups, 0);
        assert!(result.games.is_empty());
    }

    #[test]
    fn test_custom_min_distance() {
        let annotator = Annotator::new(LocationTable::new(), TierThresholds::default(), 250.0);
        let result = annotator.annotate_all(vec![create_matchup("Crescent Valley", "Pendleton")]);
        assert!(result.games.is_empty());
        assert_eq!(result.below_threshold, 1);
    }
}
