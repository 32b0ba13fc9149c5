// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnnotatedGame, Division, GameFilter, Matchup, School, Sport, Tier};
pub use requests::{BracketFile, GamesQuery, MatchupRecord};
pub use responses::{
    round1, BucketSummary, ErrorResponse, GameRecord, GamesResponse, HealthResponse,
    HomeAwaySummary, RegionalSummary, TurnaroundSummary,
};
