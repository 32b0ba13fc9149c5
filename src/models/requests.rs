use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Division, GameFilter, Matchup, Sport, Tier};

/// Bracket data file as written by the text parser and read by the loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub matchups: Vec<MatchupRecord>,
}

/// A raw matchup record as it appears in a bracket data file
///
/// Sport and division stay as strings and required fields default to empty,
/// so one bad or incomplete record only drops itself instead of failing the
/// whole file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchupRecord {
    #[serde(default)]
    #[validate(range(min = 1900, max = 2100))]
    pub year: u16,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub sport: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub division: String,
    #[serde(default)]
    pub round: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub team1: String,
    #[serde(default)]
    pub team1_seed: Option<u32>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub team2: String,
    #[serde(default)]
    pub team2_seed: Option<u32>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub neutral_site: bool,
}

impl TryFrom<MatchupRecord> for Matchup {
    type Error = String;

    fn try_from(record: MatchupRecord) -> Result<Self, Self::Error> {
        record.validate().map_err(|e| e.to_string())?;

        let sport: Sport = record.sport.parse()?;
        let division: Division = record.division.parse()?;

        Ok(Matchup {
            year: record.year,
            sport,
            division,
            round: record.round,
            team1: record.team1.trim().to_string(),
            team1_seed: record.team1_seed,
            team2: record.team2.trim().to_string(),
            team2_seed: record.team2_seed,
            score: record.score,
            location: record.location,
            is_neutral_site: record.neutral_site,
        })
    }
}

impl From<&Matchup> for MatchupRecord {
    fn from(matchup: &Matchup) -> Self {
        Self {
            year: matchup.year,
            sport: matchup.sport.to_string(),
            division: matchup.division.to_string(),
            round: matchup.round.clone(),
            team1: matchup.team1.clone(),
            team1_seed: matchup.team1_seed,
            team2: matchup.team2.clone(),
            team2_seed: matchup.team2_seed,
            score: matchup.score.clone(),
            location: matchup.location.clone(),
            neutral_site: matchup.is_neutral_site,
        }
    }
}

/// Query string for the game list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GamesQuery {
    pub sport: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<u16>,
    pub division: Option<String>,
    pub tier: Option<String>,
    pub round: Option<String>,
}

impl GamesQuery {
    /// Convert to a filter; empty strings mean "any", like the page's blank option
    pub fn to_filter(&self) -> Result<GameFilter, String> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty())
        }

        Ok(GameFilter {
            sport: non_empty(&self.sport).map(str::parse::<Sport>).transpose()?,
            year: self.year,
            division: non_empty(&self.division).map(str::parse::<Division>).transpose()?,
            tier: non_empty(&self.tier).map(str::parse::<Tier>).transpose()?,
            round: non_empty(&self.round).map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(team1: &str, sport: &str) -> MatchupRecord {
        MatchupRecord {
            year: 2024,
            sport: sport.to_string(),
            division: "2A/1A".to_string(),
            round: "First Round".to_string(),
            team1: team1.to_string(),
            team1_seed: Some(1),
            team2: "Nyssa".to_string(),
            team2_seed: None,
            score: None,
            location: String::new(),
            neutral_site: false,
        }
    }

    #[test]
    fn test_record_converts_to_matchup() {
        let matchup = Matchup::try_from(record("Gaston", "Baseball")).unwrap();

        assert_eq!(matchup.sport, Sport::Baseball);
        assert_eq!(matchup.division, Division::TwoAOneA);
        assert_eq!(matchup.team1_seed, Some(1));
        assert_eq!(matchup.team2_seed, None);
    }

    #[test]
    fn test_record_rejects_empty_team() {
        assert!(Matchup::try_from(record("", "baseball")).is_err());
    }

    #[test]
    fn test_record_rejects_unknown_sport() {
        let err = Matchup::try_from(record("Gaston", "soccer")).unwrap_err();
        assert!(err.contains("soccer"));
    }

    #[test]
    fn test_query_blank_values_are_ignored() {
        let query = GamesQuery {
            sport: Some(String::new()),
            year: Some(2024),
            division: Some("5a".to_string()),
            tier: None,
            round: None,
        };

        let filter = query.to_filter().unwrap();
        assert_eq!(filter.sport, None);
        assert_eq!(filter.year, Some(2024));
        assert_eq!(filter.division, Some(Division::FiveA));
    }

    #[test]
    fn test_query_rejects_bad_tier() {
        let query = GamesQuery {
            tier: Some("purple".to_string()),
            ..Default::default()
        };

        assert!(query.to_filter().is_err());
    }
}
