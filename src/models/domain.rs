use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A school with its home city and coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl School {
    pub fn new(name: impl Into<String>, city: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            latitude,
            longitude,
        }
    }
}

/// Playoff sport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Baseball,
    Softball,
}

impl Sport {
    pub const ALL: [Sport; 2] = [Sport::Softball, Sport::Baseball];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Baseball => "baseball",
            Sport::Softball => "softball",
        }
    }

    /// Activity code used in OSAA bracket URLs
    pub fn code(&self) -> &'static str {
        match self {
            Sport::Baseball => "bbl",
            Sport::Softball => "sbl",
        }
    }

    /// Capitalized name for display
    pub fn title(&self) -> &'static str {
        match self {
            Sport::Baseball => "Baseball",
            Sport::Softball => "Softball",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baseball" => Ok(Sport::Baseball),
            "softball" => Ok(Sport::Softball),
            other => Err(format!("unknown sport: {}", other)),
        }
    }
}

/// OSAA classification. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "6A")]
    SixA,
    #[serde(rename = "5A")]
    FiveA,
    #[serde(rename = "4A")]
    FourA,
    #[serde(rename = "3A")]
    ThreeA,
    #[serde(rename = "2A/1A")]
    TwoAOneA,
}

impl Division {
    pub const ALL: [Division; 5] = [
        Division::SixA,
        Division::FiveA,
        Division::FourA,
        Division::ThreeA,
        Division::TwoAOneA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::SixA => "6A",
            Division::FiveA => "5A",
            Division::FourA => "4A",
            Division::ThreeA => "3A",
            Division::TwoAOneA => "2A/1A",
        }
    }

    /// Path segment used in OSAA bracket URLs ("2A/1A" -> "2a1a")
    pub fn url_slug(&self) -> String {
        self.as_str().to_lowercase().replace('/', "")
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_uppercase()
            .chars()
            .filter(|c| !matches!(c, '/' | '-' | ' '))
            .collect();

        match normalized.as_str() {
            "6A" => Ok(Division::SixA),
            "5A" => Ok(Division::FiveA),
            "4A" => Ok(Division::FourA),
            "3A" => Ok(Division::ThreeA),
            "2A1A" => Ok(Division::TwoAOneA),
            _ => Err(format!("unknown division: {}", s.trim())),
        }
    }
}

/// Distance tier used for grouping and colouring games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Green,
    Yellow,
    Red,
    Unknown,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Green => "green",
            Tier::Yellow => "yellow",
            Tier::Red => "red",
            Tier::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" => Ok(Tier::Green),
            "yellow" => Ok(Tier::Yellow),
            "red" => Ok(Tier::Red),
            "unknown" => Ok(Tier::Unknown),
            other => Err(format!("unknown tier: {}", other)),
        }
    }
}

/// A single playoff game between two teams
///
/// `team1` is the first-listed team of the bracket line. By convention it is
/// treated as the home team (usually the better seed); nothing verifies that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub year: u16,
    pub sport: Sport,
    pub division: Division,
    pub round: String,
    pub team1: String,
    #[serde(default)]
    pub team1_seed: Option<u32>,
    pub team2: String,
    #[serde(default)]
    pub team2_seed: Option<u32>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "neutral_site", default)]
    pub is_neutral_site: bool,
}

impl Matchup {
    /// Minimal matchup without seeds, score or venue details
    pub fn new(
        year: u16,
        sport: Sport,
        division: Division,
        round: impl Into<String>,
        team1: impl Into<String>,
        team2: impl Into<String>,
    ) -> Self {
        Self {
            year,
            sport,
            division,
            round: round.into(),
            team1: team1.into(),
            team1_seed: None,
            team2: team2.into(),
            team2_seed: None,
            score: None,
            location: String::new(),
            is_neutral_site: false,
        }
    }

    pub fn with_seeds(mut self, team1_seed: Option<u32>, team2_seed: Option<u32>) -> Self {
        self.team1_seed = team1_seed;
        self.team2_seed = team2_seed;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>, is_neutral_site: bool) -> Self {
        self.location = location.into();
        self.is_neutral_site = is_neutral_site;
        self
    }
}

/// A matchup with its computed travel distance and tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedGame {
    #[serde(flatten)]
    pub matchup: Matchup,
    pub distance_miles: Option<f64>,
    pub tier: Tier,
}

/// Game list filter, mirroring the report page's select boxes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFilter {
    pub sport: Option<Sport>,
    pub year: Option<u16>,
    pub division: Option<Division>,
    pub tier: Option<Tier>,
    pub round: Option<String>,
}
