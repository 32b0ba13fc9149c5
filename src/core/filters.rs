use crate::models::{AnnotatedGame, GameFilter};

/// Minimum distance (miles) for a game to be tracked as long-haul
pub const MIN_DISTANCE_MILES: f64 = 95.0;

/// Check if a distance qualifies as a long-haul trip
///
/// An absent distance never qualifies; it is not treated as zero.
#[inline]
pub fn is_long_haul(distance: Option<f64>, min_distance: f64) -> bool {
    matches!(distance, Some(d) if d >= min_distance)
}

/// Check if a game passes the report filters
///
/// Every unset field matches anything. Round comparison is exact, like the
/// report page's select box.
#[inline]
pub fn matches_filter(game: &AnnotatedGame, filter: &GameFilter) -> bool {
    let matchup = &game.matchup;

    if filter.sport.is_some_and(|sport| sport != matchup.sport) {
        return false;
    }

    if filter.year.is_some_and(|year| year != matchup.year) {
        return false;
    }

    if filter.division.is_some_and(|division| division != matchup.division) {
        return false;
    }

    if filter.tier.is_some_and(|tier| tier != game.tier) {
        return false;
    }

    if let Some(round) = &filter.round {
        if *round != matchup.round {
            return false;
        }
    }

    true
}

/// Apply a filter to a game list, keeping order
pub fn filter_games<'a>(games: &'a [AnnotatedGame], filter: &GameFilter) -> Vec<&'a AnnotatedGame> {
    games.iter().filter(|game| matches_filter(game, filter)).collect()
}
