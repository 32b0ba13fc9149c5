use serde::Serialize;

use crate::models::{AnnotatedGame, Tier};

/// Upper bound (inclusive) of the green tier, in miles
pub const TIER_GREEN_MAX: f64 = 119.0;

/// Upper bound (inclusive) of the yellow tier, in miles
pub const TIER_YELLOW_MAX: f64 = 249.0;

/// Tier boundaries. Each bound is inclusive on the lower tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub green_max: f64,
    pub yellow_max: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            green_max: TIER_GREEN_MAX,
            yellow_max: TIER_YELLOW_MAX,
        }
    }
}

impl TierThresholds {
    pub fn new(green_max: f64, yellow_max: f64) -> Self {
        Self { green_max, yellow_max }
    }

    /// Classify a distance. An absent distance is always `Unknown`.
    #[inline]
    pub fn classify(&self, distance: Option<f64>) -> Tier {
        match distance {
            None => Tier::Unknown,
            Some(d) if d <= self.green_max => Tier::Green,
            Some(d) if d <= self.yellow_max => Tier::Yellow,
            Some(_) => Tier::Red,
        }
    }
}

impl Tier {
    /// Classify with the default 119/249 mile boundaries
    #[inline]
    pub fn classify(distance: Option<f64>) -> Tier {
        TierThresholds::default().classify(distance)
    }
}

/// Tier counts over a game list, plus the single longest trip
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TierBreakdown {
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
    pub unknown: usize,
    pub longest_miles: Option<f64>,
}

impl TierBreakdown {
    pub fn from_games(games: &[AnnotatedGame]) -> Self {
        let mut breakdown = Self::default();

        for game in games {
            match game.tier {
                Tier::Green => breakdown.green += 1,
                Tier::Yellow => breakdown.yellow += 1,
                Tier::Red => breakdown.red += 1,
                Tier::Unknown => breakdown.unknown += 1,
            }

            if let Some(d) = game.distance_miles {
                breakdown.longest_miles = Some(breakdown.longest_miles.map_or(d, |m| m.max(d)));
            }
        }

        breakdown
    }

    pub fn total(&self) -> usize {
        self.green + self.yellow + self.red + self.unknown
    }
}
