//! Turnaround burden aggregation
//!
//! Groups long-haul games per team playoff run and rolls them up by
//! division, year, home/away and region.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{AnnotatedGame, Division, Sport};

/// One team's playoff run: (team, year, sport, division)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamKey {
    pub team: String,
    pub year: u16,
    pub sport: Sport,
    pub division: Division,
}

/// A long-haul game from one team's point of view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamGame {
    pub round: String,
    pub opponent: String,
    pub distance: f64,
    #[serde(rename = "home")]
    pub is_home: bool,
}

/// All long-haul games of one playoff run, in bracket order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPlayoffEntry {
    #[serde(flatten)]
    pub key: TeamKey,
    pub games: Vec<TeamGame>,
}

impl TeamPlayoffEntry {
    pub fn total_miles(&self) -> f64 {
        self.games.iter().map(|g| g.distance).sum()
    }

    pub fn away_miles(&self) -> f64 {
        self.games.iter().filter(|g| !g.is_home).map(|g| g.distance).sum()
    }

    /// Two or more long-haul games in the same run
    pub fn is_multi_game(&self) -> bool {
        self.games.len() >= 2
    }
}

/// Team playoff entries keyed by [`TeamKey`], kept in first-seen order
#[derive(Debug, Clone, Default)]
pub struct TeamEntries {
    entries: Vec<TeamPlayoffEntry>,
    index: HashMap<TeamKey, usize>,
}

impl TeamEntries {
    /// Build entries from long-haul games
    ///
    /// Each game adds one record to `team1` (home, by the first-listed
    /// convention) and one to `team2` (away), carrying the same distance.
    /// Games without a distance are skipped.
    pub fn from_games(games: &[AnnotatedGame]) -> Self {
        let mut entries = Self::default();

        for game in games {
            let Some(distance) = game.distance_miles else {
                continue;
            };
            let m = &game.matchup;

            entries.record(
                TeamKey { team: m.team1.clone(), year: m.year, sport: m.sport, division: m.division },
                TeamGame { round: m.round.clone(), opponent: m.team2.clone(), distance, is_home: true },
            );
            entries.record(
                TeamKey { team: m.team2.clone(), year: m.year, sport: m.sport, division: m.division },
                TeamGame { round: m.round.clone(), opponent: m.team1.clone(), distance, is_home: false },
            );
        }

        entries
    }

    fn record(&mut self, key: TeamKey, game: TeamGame) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].games.push(game),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(TeamPlayoffEntry { key, games: vec![game] });
            }
        }
    }

    pub fn get(&self, key: &TeamKey) -> Option<&TeamPlayoffEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamPlayoffEntry> {
        self.entries.iter()
    }

    /// Entries with two or more long-haul games
    pub fn multi_game(&self) -> impl Iterator<Item = &TeamPlayoffEntry> {
        self.entries.iter().filter(|e| e.is_multi_game())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Percentage of `part` in `whole`; 0 when `whole` is 0
#[inline]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Average of `total` over `count`; 0 when `count` is 0
#[inline]
pub fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Counters for one division or year bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BucketStats {
    pub teams: usize,
    pub multi: usize,
    pub games: usize,
    pub total_miles: f64,
}

impl BucketStats {
    fn add(&mut self, entry: &TeamPlayoffEntry) {
        self.teams += 1;
        self.games += entry.games.len();
        self.total_miles += entry.total_miles();
        if entry.is_multi_game() {
            self.multi += 1;
        }
    }

    pub fn multi_percentage(&self) -> f64 {
        percentage(self.multi, self.teams)
    }

    pub fn avg_miles(&self) -> f64 {
        average(self.total_miles, self.teams)
    }
}

/// A multi-game playoff run, ranked by total miles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorstCase {
    pub team: String,
    pub year: u16,
    pub sport: Sport,
    pub division: Division,
    pub games: usize,
    pub total_miles: f64,
    pub details: Vec<TeamGame>,
}

/// Game and mileage totals split by the home flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HomeAwayTotals {
    pub home_games: usize,
    pub away_games: usize,
    pub home_miles: f64,
    pub away_miles: f64,
}

impl HomeAwayTotals {
    pub fn avg_away_miles(&self) -> f64 {
        average(self.away_miles, self.away_games)
    }
}

/// Away travel of one team across all of its playoff runs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalBurden {
    pub team: String,
    pub appearances: usize,
    pub total_away_miles: f64,
}

impl RegionalBurden {
    pub fn avg_per_appearance(&self) -> f64 {
        average(self.total_away_miles, self.appearances)
    }
}

/// Rollup statistics over all team playoff entries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TurnaroundReport {
    pub total_appearances: usize,
    pub multi_game_count: usize,
    pub total_miles: f64,
    pub by_division: BTreeMap<Division, BucketStats>,
    pub by_year: BTreeMap<u16, BucketStats>,
    /// Multi-game runs, most miles first; ties keep first-seen order
    pub worst_cases: Vec<WorstCase>,
    pub home_away: HomeAwayTotals,
}

impl TurnaroundReport {
    pub fn from_entries(entries: &TeamEntries) -> Self {
        let mut report = Self::default();

        for entry in entries.iter() {
            report.total_appearances += 1;
            report.total_miles += entry.total_miles();

            report.by_division.entry(entry.key.division).or_default().add(entry);
            report.by_year.entry(entry.key.year).or_default().add(entry);

            for game in &entry.games {
                if game.is_home {
                    report.home_away.home_games += 1;
                    report.home_away.home_miles += game.distance;
                } else {
                    report.home_away.away_games += 1;
                    report.home_away.away_miles += game.distance;
                }
            }

            if entry.is_multi_game() {
                report.multi_game_count += 1;
                report.worst_cases.push(WorstCase {
                    team: entry.key.team.clone(),
                    year: entry.key.year,
                    sport: entry.key.sport,
                    division: entry.key.division,
                    games: entry.games.len(),
                    total_miles: entry.total_miles(),
                    details: entry.games.clone(),
                });
            }
        }

        // sort_by is stable, so equal totals keep insertion order
        report.worst_cases.sort_by(|a, b| {
            b.total_miles
                .partial_cmp(&a.total_miles)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        report
    }

    /// Share of team playoff runs with two or more long-haul games
    pub fn burden_percentage(&self) -> f64 {
        percentage(self.multi_game_count, self.total_appearances)
    }

    pub fn avg_miles_per_team(&self) -> f64 {
        average(self.total_miles, self.total_appearances)
    }

    /// Division stats in canonical order, including empty divisions
    pub fn division_rows(&self) -> Vec<(Division, BucketStats)> {
        Division::ALL
            .iter()
            .map(|d| (*d, self.by_division.get(d).copied().unwrap_or_default()))
            .collect()
    }
}

/// Away-mile burden for a set of teams, heaviest first
///
/// Teams with no long-haul appearances are left out.
pub fn regional_burden(entries: &TeamEntries, teams: &[String]) -> Vec<RegionalBurden> {
    let mut burdens: Vec<RegionalBurden> = Vec::new();

    for entry in entries.iter() {
        if !teams.iter().any(|t| *t == entry.key.team) {
            continue;
        }

        let away = entry.away_miles();
        match burdens.iter_mut().find(|b| b.team == entry.key.team) {
            Some(burden) => {
                burden.appearances += 1;
                burden.total_away_miles += away;
            }
            None => burdens.push(RegionalBurden {
                team: entry.key.team.clone(),
                appearances: 1,
                total_away_miles: away,
            }),
        }
    }

    burdens.sort_by(|a, b| {
        b.total_away_miles
            .partial_cmp(&a.total_away_miles)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    burdens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Matchup, Tier};

    fn game(year: u16, division: Division, round: &str, team1: &str, team2: &str, distance: f64) -> AnnotatedGame {
        AnnotatedGame {
            matchup: Matchup::new(year, Sport::Baseball, division, round, team1, team2),
            distance_miles: Some(distance),
            tier: Tier::classify(Some(distance)),
        }
    }

    fn key(team: &str, year: u16, division: Division) -> TeamKey {
        TeamKey { team: team.to_string(), year, sport: Sport::Baseball, division }
    }

    #[test]
    fn test_entries_are_symmetric() {
        let games = vec![game(2024, Division::FiveA, "First Round", "Crescent Valley", "Pendleton", 230.0)];
        let entries = TeamEntries::from_games(&games);

        assert_eq!(entries.len(), 2);
        let home = entries.get(&key("Crescent Valley", 2024, Division::FiveA)).unwrap();
        let away = entries.get(&key("Pendleton", 2024, Division::FiveA)).unwrap();

        assert_eq!(home.games.len(), 1);
        assert_eq!(away.games.len(), 1);
        assert_eq!(home.games[0].distance, away.games[0].distance);
        assert!(home.games[0].is_home);
        assert!(!away.games[0].is_home);
        assert_eq!(home.games[0].opponent, "Pendleton");
        assert_eq!(away.games[0].opponent, "Crescent Valley");
    }

    #[test]
    fn test_games_without_distance_skipped() {
        let mut unknown = game(2024, Division::FiveA, "First Round", "A", "B", 0.0);
        unknown.distance_miles = None;
        unknown.tier = Tier::Unknown;

        assert!(TeamEntries::from_games(&[unknown]).is_empty());
    }

    #[test]
    fn test_multi_game_detection() {
        let games = vec![
            game(2025, Division::ThreeA, "First Round", "Rainier", "Enterprise", 100.0),
            game(2025, Division::ThreeA, "Quarterfinals", "South Umpqua", "Enterprise", 150.0),
        ];
        let entries = TeamEntries::from_games(&games);
        let multi: Vec<_> = entries.multi_game().collect();

        assert_eq!(multi.len(), 1);
        assert_eq!(multi[0].key.team, "Enterprise");
        assert_eq!(multi[0].total_miles(), 250.0);
    }

    #[test]
    fn test_different_years_are_separate_runs() {
        let games = vec![
            game(2024, Division::FiveA, "First Round", "Crescent Valley", "Pendleton", 230.0),
            game(2025, Division::FiveA, "First Round", "Crescent Valley", "Pendleton", 230.0),
        ];
        let entries = TeamEntries::from_games(&games);

        assert_eq!(entries.len(), 4);
        assert_eq!(entries.multi_game().count(), 0);
    }

    #[test]
    fn test_report_rollups() {
        let games = vec![
            game(2024, Division::FourA, "First Round", "Philomath", "Ontario", 319.0),
            game(2024, Division::FourA, "Quarterfinals", "Marist Catholic", "Ontario", 303.0),
            game(2023, Division::FiveA, "First Round", "Summit", "Pendleton", 165.0),
        ];
        let report = TurnaroundReport::from_entries(&TeamEntries::from_games(&games));

        // Philomath, Ontario, Marist Catholic, Summit, Pendleton
        assert_eq!(report.total_appearances, 5);
        assert_eq!(report.multi_game_count, 1);
        assert!((report.total_miles - (319.0 + 303.0 + 165.0) * 2.0).abs() < 1e-9);
        assert!((report.burden_percentage() - 20.0).abs() < 1e-9);

        let four_a = report.by_division[&Division::FourA];
        assert_eq!(four_a.teams, 3);
        assert_eq!(four_a.multi, 1);
        assert_eq!(four_a.games, 4);

        let y2023 = report.by_year[&2023];
        assert_eq!(y2023.teams, 2);
        assert_eq!(y2023.multi_percentage(), 0.0);
        assert_eq!(y2023.avg_miles(), 165.0);

        assert_eq!(report.home_away.home_games, 3);
        assert_eq!(report.home_away.away_games, 3);
        assert!((report.home_away.avg_away_miles() - 787.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_worst_cases_sorted_and_stable() {
        let games = vec![
            // A and B both travel 200 total; C travels 300
            game(2024, Division::ThreeA, "First Round", "X1", "A", 100.0),
            game(2024, Division::ThreeA, "Quarterfinals", "X2", "A", 100.0),
            game(2024, Division::ThreeA, "First Round", "X3", "B", 100.0),
            game(2024, Division::ThreeA, "Quarterfinals", "X4", "B", 100.0),
            game(2024, Division::ThreeA, "First Round", "X5", "C", 150.0),
            game(2024, Division::ThreeA, "Quarterfinals", "X6", "C", 150.0),
        ];
        let report = TurnaroundReport::from_entries(&TeamEntries::from_games(&games));
        let order: Vec<&str> = report.worst_cases.iter().map(|w| w.team.as_str()).collect();

        assert_eq!(order, vec!["C", "A", "B"]);
        assert_eq!(report.worst_cases[0].games, 2);
        assert_eq!(report.worst_cases[0].details.len(), 2);
    }

    #[test]
    fn test_empty_report_has_no_nan() {
        let report = TurnaroundReport::from_entries(&TeamEntries::default());

        assert_eq!(report.total_appearances, 0);
        assert_eq!(report.multi_game_count, 0);
        assert_eq!(report.burden_percentage(), 0.0);
        assert_eq!(report.avg_miles_per_team(), 0.0);
        assert_eq!(report.home_away.avg_away_miles(), 0.0);
        for (_, stats) in report.division_rows() {
            assert_eq!(stats.multi_percentage(), 0.0);
            assert_eq!(stats.avg_miles(), 0.0);
        }
    }

    #[test]
    fn test_regional_burden_counts_away_miles_only() {
        let games = vec![
            game(2024, Division::FourA, "First Round", "Philomath", "Ontario", 319.0),
            game(2024, Division::FourA, "Quarterfinals", "Ontario", "Baker", 60.0),
            game(2025, Division::FourA, "First Round", "Marist Catholic", "Ontario", 303.0),
            game(2025, Division::FourA, "First Round", "Hidden Valley", "Baker", 400.0),
        ];
        let entries = TeamEntries::from_games(&games);
        let teams = vec!["Ontario".to_string(), "Baker".to_string(), "Joseph".to_string()];

        let burden = regional_burden(&entries, &teams);

        assert_eq!(burden.len(), 2);
        assert_eq!(burden[0].team, "Ontario");
        assert_eq!(burden[0].appearances, 2);
        assert_eq!(burden[0].total_away_miles, 622.0);
        assert_eq!(burden[0].avg_per_appearance(), 311.0);
        assert_eq!(burden[1].team, "Baker");
        assert_eq!(burden[1].total_away_miles, 460.0);
    }

    #[test]
    fn test_percentage_helpers() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(average(10.0, 0), 0.0);
        assert_eq!(average(10.0, 4), 2.5);
    }
}
