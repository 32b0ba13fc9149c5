use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::{BracketFile, Matchup, MatchupRecord};

/// Errors that can occur when reading or writing bracket data files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid bracket JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse bracket JSON text into matchups
///
/// Records that fail validation are skipped with a warning.
pub fn parse_matchups(json: &str) -> Result<Vec<Matchup>, LoadError> {
    let file: BracketFile = serde_json::from_str(json)?;
    let total = file.matchups.len();

    let matchups: Vec<Matchup> = file
        .matchups
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match Matchup::try_from(record) {
            Ok(matchup) => Some(matchup),
            Err(e) => {
                tracing::warn!("Skipping matchup record {}: {}", i, e);
                None
            }
        })
        .collect();

    if matchups.len() < total {
        tracing::warn!("Loaded {} of {} matchup records", matchups.len(), total);
    }

    Ok(matchups)
}

/// Load matchups from a bracket JSON file
pub fn load_matchups(path: impl AsRef<Path>) -> Result<Vec<Matchup>, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let matchups = parse_matchups(&json)?;
    tracing::info!("Loaded {} matchups from {}", matchups.len(), path.display());
    Ok(matchups)
}

/// Write matchups in the bracket JSON format
pub fn save_matchups(
    path: impl AsRef<Path>,
    matchups: &[Matchup],
    description: Option<String>,
) -> Result<(), LoadError> {
    let path = path.as_ref();
    let file = BracketFile {
        description,
        matchups: matchups.iter().map(MatchupRecord::from).collect(),
    };

    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("Saved {} matchups to {}", matchups.len(), path.display());
    Ok(())
}
