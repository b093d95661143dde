//! Normalized-record aggregation, impact scoring and report assembly.
//!
//! Raw records are decoded and normalized, summed per category (and per
//! year or state), scored into a single monetary ImpactIndex, and shaped
//! into the ranked, temporal and per-capita tables the reports render.

pub mod aggregate;
pub mod analyzer;
pub mod impact;
pub mod per_capita;
pub mod prepare;
pub mod trend;
pub mod types;
pub mod utility;
