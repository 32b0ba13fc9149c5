use crate::core::{
    annotator::{AnnotationResult, Annotator},
    tier::TierBreakdown,
    turnaround::{regional_burden, RegionalBurden, TeamEntries, TurnaroundReport},
};
use crate::models::Matchup;

/// Eastern Oregon schools tracked for away-travel burden
pub const EASTERN_OREGON_TEAMS: &[&str] = &[
    "Pendleton",
    "Hermiston",
    "La Grande",
    "Baker",
    "Ontario",
    "Burns",
    "Enterprise",
    "Nyssa",
    "Vale",
    "Crane",
    "Joseph",
    "Grant Union",
    "Powder Valley",
];

/// Everything computed from one batch of matchups
#[derive(Debug)]
pub struct Analysis {
    pub annotation: AnnotationResult,
    pub entries: TeamEntries,
    pub report: TurnaroundReport,
    pub regional: Vec<RegionalBurden>,
    pub tiers: TierBreakdown,
}

impl Analysis {
    /// Run the full pipeline: annotate, filter, aggregate and roll up
    pub fn run(annotator: &Annotator, matchups: Vec<Matchup>, regional_teams: &[String]) -> Self {
        let annotation = annotator.annotate_all(matchups);
        let entries = TeamEntries::from_games(&annotation.games);
        let report = TurnaroundReport::from_entries(&entries);
        let regional = regional_burden(&entries, regional_teams);
        let tiers = TierBreakdown::from_games(&annotation.games);

        tracing::info!(
            "Analysis complete: {} long-haul games, {} team playoff runs, {} with 2+ games",
            annotation.games.len(),
            report.total_appearances,
            report.multi_game_count
        );

        Self {
            annotation,
            entries,
            report,
            regional,
            tiers,
        }
    }

    /// Default regional team list as owned strings
    pub fn default_regional_teams() -> Vec<String> {
        EASTERN_OREGON_TEAMS.iter().map(|t| t.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Division, Sport};

    #[test]
    fn test_crescent_valley_pendleton() {
        let matchups = vec![Matchup::new(
            2024,
            Sport::Baseball,
            Division::FiveA,
            "First Round",
            "Crescent Valley",
            "Pendleton",
        )];

        let analysis = Analysis::run(&Annotator::default(), matchups, &Analysis::default_regional_teams());

        assert_eq!(analysis.annotation.games.len(), 1);
        assert_eq!(analysis.report.total_appearances, 2);
        assert_eq!(analysis.report.multi_game_count, 0);
        assert_eq!(analysis.tiers.yellow, 1);

        assert_eq!(analysis.regional.len(), 1);
        assert_eq!(analysis.regional[0].team, "Pendleton");
        assert!((analysis.regional[0].total_away_miles - 230.0).abs() < 2.0);
    }

    #[test]
    fn test_empty_input() {
        let analysis = Analysis::run(&Annotator::default(), vec![], &[]);

        assert_eq!(analysis.report.total_appearances, 0);
        assert_eq!(analysis.report.burden_percentage(), 0.0);
        assert!(analysis.regional.is_empty());
        assert_eq!(analysis.tiers.total(), 0);
    }
}
