//! Annual ImpactIndex series, densified over the full year range.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::analyzers::impact::{ImpactWeights, impact_index};
use crate::analyzers::types::{CategoryAggregate, TrendPoint};
use crate::analyzers::utility::fill_missing;

/// One point per (category, year) in `categories` x `years`.
///
/// `by_year` must be grouped by category and year. Pairs without source
/// rows get an ImpactIndex of exactly zero. Points are ordered by the
/// position of their category in `categories`, then by year.
pub fn densify(
    by_year: &[CategoryAggregate],
    categories: &[&'static str],
    years: RangeInclusive<i32>,
    weights: &ImpactWeights,
) -> Vec<TrendPoint> {
    let observed: BTreeMap<(&'static str, i32), f64> = by_year
        .iter()
        .filter_map(|agg| {
            agg.key
                .year
                .map(|year| ((agg.key.category, year), impact_index(&agg.totals, weights)))
        })
        .collect();

    let key_space = categories
        .iter()
        .flat_map(|c| years.clone().map(move |y| (*c, y)));

    fill_missing(key_space, &observed, 0.0)
        .into_iter()
        .map(|((category, year), impact_index)| TrendPoint {
            category,
            year,
            impact_index,
        })
        .collect()
}
