//! OSAA long-haul - playoff travel analysis for Oregon high school baseball and softball
//!
//! Loads bracket matchups, measures the distance between the two schools in
//! each game and reports the long-haul games along with the turnaround burden
//! they put on teams that travel more than once in a single postseason.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_distance, Analysis, Annotator, LocationTable, TurnaroundReport};
pub use error::AppError;
pub use models::{AnnotatedGame, Division, Matchup, Sport, Tier};
