//! State damage divided by resident population.

use std::collections::BTreeMap;

use tracing::debug;

use crate::analyzers::types::{Metric, PerCapitaRow, Totals};
use crate::analyzers::utility::fill_missing;
use crate::population;

/// Per-capita `metric` for every state in the population table.
///
/// States without any damage rows get zero. State codes with no population
/// entry (territories, marine zones) are dropped.
pub fn per_capita(state_totals: &BTreeMap<String, Totals>, metric: Metric) -> Vec<PerCapitaRow> {
    let damage: BTreeMap<String, f64> = state_totals
        .iter()
        .map(|(state, totals)| (state.clone(), totals.get(metric)))
        .collect();

    let dropped: Vec<&String> = damage
        .keys()
        .filter(|code| population::lookup(code).is_none())
        .collect();
    if !dropped.is_empty() {
        debug!(metric = metric.label(), ?dropped, "States without population dropped");
    }

    let key_space = population::states().map(|s| s.code.to_string());

    fill_missing(key_space, &damage, 0.0)
        .into_iter()
        .filter_map(|(code, damage)| {
            let info = population::lookup(&code)?;
            Some(PerCapitaRow {
                state: info.code,
                name: info.name,
                fips: info.fips,
                population: info.population,
                damage,
                per_capita: damage / info.population as f64,
            })
        })
        .collect()
}
