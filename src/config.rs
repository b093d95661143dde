//! Fixed analysis constants and the configuration value built from them.

use serde::{Deserialize, Serialize};

/// Events beginning on or before the last day of this year are excluded.
pub const CUTOFF_YEAR: i32 = 1995;

/// Value of a statistical life, in dollars.
pub const VALUE_PER_FATALITY: f64 = 11_600_000.0;

/// An injury is valued at this fraction of a fatality.
pub const INJURY_VALUE_DIVISOR: f64 = 100.0;

/// Size of the fatality, injury, property and crop rankings.
pub const TOP_N_HARM: usize = 5;

/// Size of the combined impact ranking and its annual trend.
pub const TOP_N_IMPACT: usize = 10;

/// Parameters threaded through the pipeline.
///
/// [`AnalysisConfig::default`] reproduces the reference analysis; tests build
/// variants with struct update syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub cutoff_year: i32,
    pub value_per_fatality: f64,
    pub injury_value_divisor: f64,
    pub top_n_harm: usize,
    pub top_n_impact: usize,
}

impl AnalysisConfig {
    pub fn value_per_injury(&self) -> f64 {
        self.value_per_fatality / self.injury_value_divisor
    }

    /// First year inside the analysis window.
    pub fn first_year(&self) -> i32 {
        self.cutoff_year + 1
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cutoff_year: CUTOFF_YEAR,
            value_per_fatality: VALUE_PER_FATALITY,
            injury_value_divisor: INJURY_VALUE_DIVISOR,
            top_n_harm: TOP_N_HARM,
            top_n_impact: TOP_N_IMPACT,
        }
    }
}
