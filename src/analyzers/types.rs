//! Data types used by the aggregation pipeline.

use serde::Serialize;

/// A storm event after damage decoding and event-type normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub category: &'static str,
    pub fatalities: u64,
    pub injuries: u64,
    pub property_damage: f64,
    pub crop_damage: f64,
    pub state: String,
    pub year: i32,
}

/// The four summed impact dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Fatalities,
    Injuries,
    PropertyDamage,
    CropDamage,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Fatalities => "fatalities",
            Metric::Injuries => "injuries",
            Metric::PropertyDamage => "property_damage",
            Metric::CropDamage => "crop_damage",
        }
    }
}

/// Sums of the impact dimensions over some group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub fatalities: f64,
    pub injuries: f64,
    pub property_damage: f64,
    pub crop_damage: f64,
}

impl Totals {
    pub fn add(&mut self, record: &NormalizedRecord) {
        self.fatalities += record.fatalities as f64;
        self.injuries += record.injuries as f64;
        self.property_damage += record.property_damage;
        self.crop_damage += record.crop_damage;
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Fatalities => self.fatalities,
            Metric::Injuries => self.injuries,
            Metric::PropertyDamage => self.property_damage,
            Metric::CropDamage => self.crop_damage,
        }
    }
}

/// How records are grouped before summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    CategoryYear,
    CategoryState,
}

/// Grouping key; `year` and `state` are set only when grouped by them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub category: &'static str,
    pub year: Option<i32>,
    pub state: Option<String>,
}

/// Summed metrics for one distinct key.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub key: GroupKey,
    pub totals: Totals,
}

/// Per-category totals with their combined ImpactIndex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactRow {
    pub category: &'static str,
    pub fatalities: f64,
    pub injuries: f64,
    pub property_damage: f64,
    pub crop_damage: f64,
    pub impact_index: f64,
}

/// One bar of a ranked bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub rank: usize,
    pub category: &'static str,
    pub value: f64,
}

/// ImpactIndex of one category in one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub category: &'static str,
    pub year: i32,
    pub impact_index: f64,
}

/// Damage per resident for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerCapitaRow {
    pub state: &'static str,
    pub name: &'static str,
    pub fips: u32,
    pub population: u64,
    pub damage: f64,
    pub per_capita: f64,
}

/// A raw label that fell through to the catch-all, with its row count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnmappedLabel {
    pub label: String,
    pub rows: usize,
}
