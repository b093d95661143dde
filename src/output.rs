//! Output formatting and persistence for report artifacts.
//!
//! Tables are written as CSV, chart documents and the run summary as
//! pretty-printed JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::stats::RunStats;

/// Logs run statistics using Rust's debug pretty-print format.
pub fn print_pretty(stats: &RunStats) {
    debug!("{:#?}", stats);
}

/// Writes `rows` to a CSV file at `path`, replacing any existing file.
///
/// The header row is taken from the row type's field names.
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV table");

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes `value` as pretty-printed JSON to `path`.
pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    debug!(path = %path.display(), "Writing JSON document");

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    Ok(())
}

/// Path of the CSV table for artifact `name`.
pub fn table_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.csv"))
}

/// Path of the Vega-Lite document for artifact `name`.
pub fn chart_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.vl.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::RankedRow;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let stats = RunStats::default();
        print_pretty(&stats);
    }

    #[test]
    fn test_write_table_header_and_rows() {
        let path = temp_path("storm_impact_test_table.csv");
        let _ = fs::remove_file(&path);

        let rows = vec![
            RankedRow { rank: 1, category: "tornado", value: 10.0 },
            RankedRow { rank: 2, category: "flood", value: 5.5 },
        ];
        write_table(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["rank,category,value", "1,tornado,10.0", "2,flood,5.5"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_table_replaces_existing_file() {
        let path = temp_path("storm_impact_test_replace.csv");
        let _ = fs::remove_file(&path);

        let rows = vec![RankedRow { rank: 1, category: "hail", value: 1.0 }];
        write_table(&path, &rows).unwrap();
        write_table(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_json_round_trips_summary() {
        let path = temp_path("storm_impact_test_summary.json");
        let _ = fs::remove_file(&path);

        let stats = RunStats {
            rows_read: 7,
            ..Default::default()
        };
        write_json(&path, &stats).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["rows_read"], 7);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let path = temp_path("storm_impact_no_such_dir/table.csv");
        let rows: Vec<RankedRow> = vec![];
        assert!(write_table(&path, &rows).is_err());
    }

    #[test]
    fn test_artifact_paths() {
        let dir = Path::new("reports");
        assert_eq!(table_path(dir, "top_impact"), Path::new("reports/top_impact.csv"));
        assert_eq!(chart_path(dir, "top_impact"), Path::new("reports/top_impact.vl.json"));
    }
}
