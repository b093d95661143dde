//! Turns loaded raw records into normalized records.
//!
//! Drops rows carrying the disallowed magnitude code, decodes both damage
//! columns and maps each label onto the canonical taxonomy.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use tracing::{info, warn};

use crate::analyzers::types::{NormalizedRecord, UnmappedLabel};
use crate::decoder::{MagnitudeCode, decode, has_disallowed_code};
use crate::loader::RawEventRecord;
use crate::normalizer::{self, CATCH_ALL};
use crate::stats::RunStats;

/// Output of [`prepare`].
#[derive(Debug, Default)]
pub struct Prepared {
    pub records: Vec<NormalizedRecord>,
    /// Labels without a table entry, most frequent first.
    pub unmapped: Vec<UnmappedLabel>,
}

pub fn prepare(raw: Vec<RawEventRecord>, stats: &mut RunStats) -> Prepared {
    let before = raw.len();
    let kept: Vec<_> = raw
        .into_iter()
        .filter(|r| !has_disallowed_code(r.prop_code.as_deref(), r.crop_code.as_deref()))
        .collect();
    stats.rows_disallowed_code = before - kept.len();

    let mut raw_labels = BTreeSet::new();
    let mut unmapped: BTreeMap<String, usize> = BTreeMap::new();
    let mut records = Vec::with_capacity(kept.len());

    for r in kept {
        let property_damage = decode_damage(r.prop_mantissa, r.prop_code.as_deref(), stats);
        let crop_damage = decode_damage(r.crop_mantissa, r.crop_code.as_deref(), stats);

        let label = r.event_type.to_lowercase();
        let category = match normalizer::lookup(&label) {
            Some(category) => category,
            None => {
                *unmapped.entry(label.clone()).or_default() += 1;
                CATCH_ALL
            }
        };
        raw_labels.insert(label);

        records.push(NormalizedRecord {
            category,
            fatalities: count(r.fatalities),
            injuries: count(r.injuries),
            property_damage,
            crop_damage,
            state: r.state,
            year: r.begin.year(),
        });
    }

    stats.records_normalized = records.len();
    stats.distinct_raw_labels = raw_labels.len();
    stats.distinct_categories = records
        .iter()
        .map(|r| r.category)
        .collect::<BTreeSet<_>>()
        .len();
    stats.rows_catch_all = records.iter().filter(|r| r.category == CATCH_ALL).count();
    stats.first_year = records.iter().map(|r| r.year).min();
    stats.last_year = records.iter().map(|r| r.year).max();

    info!(
        records = stats.records_normalized,
        dropped_disallowed_code = stats.rows_disallowed_code,
        unrecognized_codes = stats.unrecognized_code_total(),
        distinct_raw_labels = stats.distinct_raw_labels,
        distinct_categories = stats.distinct_categories,
        catch_all_pct = stats.catch_all_pct(),
        "Records normalized"
    );

    let mut unmapped: Vec<_> = unmapped
        .into_iter()
        .map(|(label, rows)| UnmappedLabel { label, rows })
        .collect();
    unmapped.sort_by(|a, b| b.rows.cmp(&a.rows));

    Prepared { records, unmapped }
}

/// Decodes one damage column, counting codes that carry no multiplier.
fn decode_damage(mantissa: Option<f64>, code: Option<&str>, stats: &mut RunStats) -> f64 {
    let parsed = MagnitudeCode::parse(code);
    if parsed == MagnitudeCode::Unrecognized {
        let code = code.unwrap_or_default();
        if stats.record_unrecognized_code(code) {
            warn!(code, "Unrecognized magnitude code, damage counted as zero");
        }
    }
    decode(mantissa, parsed)
}

fn count(value: Option<f64>) -> u64 {
    value.filter(|v| v.is_finite() && *v > 0.0).map_or(0, |v| v.round() as u64)
}
