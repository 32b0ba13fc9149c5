// Core algorithm exports
pub mod analysis;
pub mod annotator;
pub mod distance;
pub mod filters;
pub mod locations;
pub mod tier;
pub mod turnaround;

pub use analysis::{Analysis, EASTERN_OREGON_TEAMS};
pub use annotator::{AnnotationResult, Annotator};
pub use distance::{distance_between, haversine_distance};
pub use filters::{filter_games, is_long_haul, matches_filter, MIN_DISTANCE_MILES};
pub use locations::{primary_school, LocationTable};
pub use tier::{TierBreakdown, TierThresholds};
pub use turnaround::{
    regional_burden, BucketStats, HomeAwayTotals, RegionalBurden, TeamEntries, TeamGame, TeamKey,
    TeamPlayoffEntry, TurnaroundReport, WorstCase,
};
