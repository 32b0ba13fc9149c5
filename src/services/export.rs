use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::models::{AnnotatedGame, GameRecord, TurnaroundSummary};

/// Errors that can occur when writing report files
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error for {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write game rows as CSV to any writer
pub fn write_csv<W: Write>(writer: W, games: &[AnnotatedGame]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for game in games {
        wtr.serialize(GameRecord::from(game))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export games to a CSV file
pub fn export_csv(path: impl AsRef<Path>, games: &[AnnotatedGame]) -> Result<(), ExportError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = fs::File::create(path).map_err(|source| ExportError::Io {
        path: path_str.clone(),
        source,
    })?;
    write_csv(file, games).map_err(|source| ExportError::Csv {
        path: path_str.clone(),
        source,
    })?;

    tracing::info!("Exported {} games to {}", games.len(), path_str);
    Ok(())
}

/// Game rows as a JSON array
pub fn games_json(games: &[AnnotatedGame]) -> Result<String, ExportError> {
    let records: Vec<GameRecord> = games.iter().map(GameRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Write the turnaround summary JSON
pub fn export_summary(path: impl AsRef<Path>, summary: &TurnaroundSummary) -> Result<(), ExportError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(summary)?;
    write_text(path, &json)?;

    tracing::info!("Analysis exported to {}", path.display());
    Ok(())
}

/// Write a text file, such as the rendered HTML report
pub fn write_text(path: impl AsRef<Path>, contents: &str) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Division, Matchup, Sport, Tier};

    fn create_game() -> AnnotatedGame {
        AnnotatedGame {
            matchup: Matchup::new(2024, Sport::Baseball, Division::TwoAOneA, "First Round", "Kennedy", "Nyssa, OR")
                .with_seeds(Some(1), None)
                .with_location("Kennedy HS", false),
            distance_miles: Some(312.345),
            tier: Tier::Red,
        }
    }

    #[test]
    fn test_csv_columns_and_values() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[create_game()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "year,sport,division,round,team1,team1_seed,team2,team2_seed,score,location,neutral_site,distance_miles,tier"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024,baseball,2A/1A,First Round,Kennedy,1,\"Nyssa, OR\",,,Kennedy HS,false,312.3,red"
        );
    }

    #[test]
    fn test_empty_csv_has_no_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_games_json() {
        let json = games_json(&[create_game()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["distance_miles"], 312.3);
        assert_eq!(value[0]["team2_seed"], serde_json::Value::Null);
    }

    #[test]
    fn test_export_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("osaa_brackets.csv");

        export_csv(&path, &[create_game()]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_export_csv_error_names_path() {
        let err = export_csv("/nonexistent/dir/osaa_brackets.csv", &[create_game()]).unwrap_err();

        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/dir/osaa_brackets.csv"));
    }
}
