use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{
    BucketStats, HomeAwayTotals, RegionalBurden, TierBreakdown, TurnaroundReport, WorstCase,
};
use crate::models::domain::{AnnotatedGame, Division, Sport, Tier};

/// Round to one decimal place
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Flat game row used by the CSV export, the report page and the games endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub year: u16,
    pub sport: Sport,
    pub division: Division,
    pub round: String,
    pub team1: String,
    pub team1_seed: Option<u32>,
    pub team2: String,
    pub team2_seed: Option<u32>,
    pub score: Option<String>,
    pub location: String,
    pub neutral_site: bool,
    pub distance_miles: Option<f64>,
    pub tier: Tier,
}

impl From<&AnnotatedGame> for GameRecord {
    fn from(game: &AnnotatedGame) -> Self {
        let m = &game.matchup;
        Self {
            year: m.year,
            sport: m.sport,
            division: m.division,
            round: m.round.clone(),
            team1: m.team1.clone(),
            team1_seed: m.team1_seed,
            team2: m.team2.clone(),
            team2_seed: m.team2_seed,
            score: m.score.clone(),
            location: m.location.clone(),
            neutral_site: m.is_neutral_site,
            distance_miles: game.distance_miles.map(round1),
            tier: game.tier,
        }
    }
}

/// Game list endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesResponse {
    pub games: Vec<GameRecord>,
    pub total_results: usize,
}

/// One division or year row of the summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub teams: usize,
    pub multi: usize,
    pub games: usize,
    pub total_miles: f64,
    pub multi_percentage: f64,
    pub avg_miles: f64,
}

impl From<&BucketStats> for BucketSummary {
    fn from(stats: &BucketStats) -> Self {
        Self {
            teams: stats.teams,
            multi: stats.multi,
            games: stats.games,
            total_miles: stats.total_miles.round(),
            multi_percentage: round1(stats.multi_percentage()),
            avg_miles: round1(stats.avg_miles()),
        }
    }
}

/// Home/away split of the summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomeAwaySummary {
    pub home_games: usize,
    pub away_games: usize,
    pub home_miles: f64,
    pub away_miles: f64,
    pub avg_away_miles: f64,
}

impl From<&HomeAwayTotals> for HomeAwaySummary {
    fn from(totals: &HomeAwayTotals) -> Self {
        Self {
            home_games: totals.home_games,
            away_games: totals.away_games,
            home_miles: totals.home_miles.round(),
            away_miles: totals.away_miles.round(),
            avg_away_miles: round1(totals.avg_away_miles()),
        }
    }
}

/// Regional burden row of the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalSummary {
    pub team: String,
    pub appearances: usize,
    pub total_away_miles: f64,
    pub avg_per_appearance: f64,
}

impl From<&RegionalBurden> for RegionalSummary {
    fn from(burden: &RegionalBurden) -> Self {
        Self {
            team: burden.team.clone(),
            appearances: burden.appearances,
            total_away_miles: burden.total_away_miles.round(),
            avg_per_appearance: round1(burden.avg_per_appearance()),
        }
    }
}

/// Turnaround analysis summary, written as `turnaround_analysis.json`
#[derive(Debug, Clone, Serialize)]
pub struct TurnaroundSummary {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub total_team_playoff_combinations: usize,
    pub teams_with_multiple_longhaul: usize,
    pub turnaround_burden_percentage: f64,
    pub total_longhaul_miles: f64,
    pub avg_miles_per_team: f64,
    pub by_division: BTreeMap<Division, BucketSummary>,
    pub by_year: BTreeMap<u16, BucketSummary>,
    pub worst_cases: Vec<WorstCase>,
    pub home_away: HomeAwaySummary,
    pub regional_burden: Vec<RegionalSummary>,
    pub tier_breakdown: TierBreakdown,
}

impl TurnaroundSummary {
    /// Build the summary, keeping the `top_n` worst cases
    pub fn new(
        report: &TurnaroundReport,
        regional: &[RegionalBurden],
        tiers: &TierBreakdown,
        top_n: usize,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now(),
            total_team_playoff_combinations: report.total_appearances,
            teams_with_multiple_longhaul: report.multi_game_count,
            turnaround_burden_percentage: round1(report.burden_percentage()),
            total_longhaul_miles: report.total_miles.round(),
            avg_miles_per_team: round1(report.avg_miles_per_team()),
            by_division: report
                .by_division
                .iter()
                .map(|(division, stats)| (*division, BucketSummary::from(stats)))
                .collect(),
            by_year: report
                .by_year
                .iter()
                .map(|(year, stats)| (*year, BucketSummary::from(stats)))
                .collect(),
            worst_cases: report.worst_cases.iter().take(top_n).cloned().collect(),
            home_away: HomeAwaySummary::from(&report.home_away),
            regional_burden: regional.iter().map(RegionalSummary::from).collect(),
            tier_breakdown: tiers.clone(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub games_loaded: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
