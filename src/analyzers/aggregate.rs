use std::collections::BTreeMap;

use crate::analyzers::types::{CategoryAggregate, GroupBy, GroupKey, NormalizedRecord, Totals};

/// Sums the metrics of `records` per distinct grouping key.
///
/// One row is produced for each key that actually occurs, ordered by key.
/// No zero rows are fabricated for absent combinations.
pub fn aggregate(records: &[NormalizedRecord], group_by: GroupBy) -> Vec<CategoryAggregate> {
    let mut groups: BTreeMap<GroupKey, Totals> = BTreeMap::new();

    for record in records {
        groups.entry(key_for(record, group_by)).or_default().add(record);
    }

    groups
        .into_iter()
        .map(|(key, totals)| CategoryAggregate { key, totals })
        .collect()
}

/// Sums the metrics of `records` per state, across all categories.
pub fn totals_by_state(records: &[NormalizedRecord]) -> BTreeMap<String, Totals> {
    let mut states: BTreeMap<String, Totals> = BTreeMap::new();
    for agg in aggregate(records, GroupBy::CategoryState) {
        let state = agg.key.state.unwrap_or_default();
        let entry = states.entry(state).or_default();
        entry.fatalities += agg.totals.fatalities;
        entry.injuries += agg.totals.injuries;
        entry.property_damage += agg.totals.property_damage;
        entry.crop_damage += agg.totals.crop_damage;
    }
    states
}

fn key_for(record: &NormalizedRecord, group_by: GroupBy) -> GroupKey {
    GroupKey {
        category: record.category,
        year: match group_by {
            GroupBy::CategoryYear => Some(record.year),
            _ => None,
        },
        state: match group_by {
            GroupBy::CategoryState => Some(record.state.clone()),
            _ => None,
        },
    }
}
