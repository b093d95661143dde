use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Counters collected over one pipeline run, written out as `summary.json`.
#[derive(Debug, Default, Serialize)]
pub struct RunStats {
    pub generated_at: Option<DateTime<Utc>>,
    pub input: Option<String>,

    // loader
    pub rows_read: usize,
    pub rows_before_window: usize,
    pub rows_bad_date: usize,
    pub rows_in_window: usize,

    // decoder
    pub rows_disallowed_code: usize,
    pub unrecognized_codes: BTreeMap<String, usize>,

    // normalizer
    pub records_normalized: usize,
    pub distinct_raw_labels: usize,
    pub distinct_categories: usize,
    pub rows_catch_all: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,

    // reporters
    pub artifacts_written: Vec<String>,
    pub artifacts_failed: BTreeMap<String, String>,
}

impl RunStats {
    pub fn new(input: &str) -> Self {
        RunStats {
            generated_at: Some(Utc::now()),
            input: Some(input.to_string()),
            ..Default::default()
        }
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    /// Share of in-window rows that landed in the catch-all category.
    pub fn catch_all_pct(&self) -> f64 {
        Self::pct(self.rows_catch_all, self.records_normalized)
    }

    /// Counts one damage field carrying an unrecognized magnitude code.
    ///
    /// Returns `true` the first time a given code is seen.
    pub fn record_unrecognized_code(&mut self, code: &str) -> bool {
        let count = self.unrecognized_codes.entry(code.to_string()).or_default();
        *count += 1;
        *count == 1
    }

    pub fn unrecognized_code_total(&self) -> usize {
        self.unrecognized_codes.values().sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.artifacts_failed.is_empty()
    }
}
