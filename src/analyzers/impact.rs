//! Combined monetary impact of an event category.
//!
//! `index = fatalities * per_fatality + injuries * per_injury + property + crop`

use crate::analyzers::types::{CategoryAggregate, ImpactRow, Totals};
use crate::config::AnalysisConfig;

/// Dollar value assigned to one fatality and one injury.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactWeights {
    pub per_fatality: f64,
    pub per_injury: f64,
}

impl From<&AnalysisConfig> for ImpactWeights {
    fn from(config: &AnalysisConfig) -> Self {
        ImpactWeights {
            per_fatality: config.value_per_fatality,
            per_injury: config.value_per_injury(),
        }
    }
}

pub fn impact_index(totals: &Totals, weights: &ImpactWeights) -> f64 {
    totals.fatalities * weights.per_fatality
        + totals.injuries * weights.per_injury
        + totals.property_damage
        + totals.crop_damage
}

/// Scores each aggregate, largest ImpactIndex first.
///
/// Equal scores keep their aggregate order.
pub fn score(aggregates: &[CategoryAggregate], weights: &ImpactWeights) -> Vec<ImpactRow> {
    let mut rows: Vec<ImpactRow> = aggregates
        .iter()
        .map(|agg| ImpactRow {
            category: agg.key.category,
            fatalities: agg.totals.fatalities,
            injuries: agg.totals.injuries,
            property_damage: agg.totals.property_damage,
            crop_damage: agg.totals.crop_damage,
            impact_index: impact_index(&agg.totals, weights),
        })
        .collect();

    rows.sort_by(|a, b| b.impact_index.total_cmp(&a.impact_index));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::GroupKey;

    fn weights() -> ImpactWeights {
        ImpactWeights::from(&AnalysisConfig::default())
    }

    fn agg(category: &'static str, fatalities: f64, property_damage: f64) -> CategoryAggregate {
        CategoryAggregate {
            key: GroupKey {
                category,
                year: None,
                state: None,
            },
            totals: Totals {
                fatalities,
                property_damage,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_weights_from_default_config() {
        let w = weights();
        assert_eq!(w.per_fatality, 11_600_000.0);
        assert_eq!(w.per_injury, 116_000.0);
    }

    #[test]
    fn test_impact_index() {
        let totals = Totals {
            fatalities: 1.0,
            injuries: 2.0,
            property_damage: 10_000.0,
            crop_damage: 5_000_000.0,
        };
        assert_eq!(impact_index(&totals, &weights()), 16_842_000.0);
    }

    #[test]
    fn test_impact_index_is_monotonic() {
        let base = Totals {
            fatalities: 1.0,
            injuries: 1.0,
            property_damage: 1.0,
            crop_damage: 1.0,
        };
        let w = weights();
        let bumped = [
            Totals { fatalities: 2.0, ..base },
            Totals { injuries: 2.0, ..base },
            Totals { property_damage: 2.0, ..base },
            Totals { crop_damage: 2.0, ..base },
        ];
        for t in bumped {
            assert!(impact_index(&t, &w) > impact_index(&base, &w));
        }
    }

    #[test]
    fn test_score_orders_descending() {
        let rows = score(
            &[agg("flood", 0.0, 5.0e9), agg("heat", 1_000.0, 0.0), agg("hail", 0.0, 1.0e9)],
            &weights(),
        );
        let order: Vec<_> = rows.iter().map(|r| r.category).collect();
        assert_eq!(order, vec!["heat", "flood", "hail"]);
    }
}
