//! Vega-Lite chart documents for the report artifacts.
//!
//! Each document inlines its data, so a `.vl.json` file renders on its own
//! in any Vega-Lite viewer. Map documents fetch the US state geometry from
//! the public vega-datasets CDN and join on the state FIPS code.

use serde_json::{Value, json};

use crate::analyzers::types::{PerCapitaRow, RankedRow, TrendPoint};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
pub const US_STATES_TOPOJSON: &str = "https://cdn.jsdelivr.net/npm/vega-datasets@2/data/us-10m.json";

/// Horizontal bar chart of a ranking, biggest bar on top.
pub fn bar_chart(title: &str, value_title: &str, rows: &[RankedRow]) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": title,
        "width": 480,
        "data": { "values": rows },
        "mark": "bar",
        "encoding": {
            "y": {
                "field": "category",
                "type": "nominal",
                "sort": { "field": "rank", "order": "ascending" },
                "title": "Event type"
            },
            "x": {
                "field": "value",
                "type": "quantitative",
                "title": value_title
            },
            "tooltip": [
                { "field": "category", "type": "nominal" },
                { "field": "value", "type": "quantitative", "format": ",.0f" }
            ]
        }
    })
}

/// Multi-series line chart of annual ImpactIndex.
///
/// A year slider bound to `through_year` plays the series forward, standing
/// in for an animated rendering.
pub fn trend_chart(title: &str, points: &[TrendPoint]) -> Value {
    let first = points.iter().map(|p| p.year).min().unwrap_or_default();
    let last = points.iter().map(|p| p.year).max().unwrap_or_default();

    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": title,
        "width": 640,
        "height": 360,
        "data": { "values": points },
        "params": [{
            "name": "through_year",
            "value": last,
            "bind": { "input": "range", "min": first, "max": last, "step": 1, "name": "Year " }
        }],
        "transform": [{ "filter": "datum.year <= through_year" }],
        "mark": { "type": "line", "point": true },
        "encoding": {
            "x": { "field": "year", "type": "ordinal", "title": "Year" },
            "y": { "field": "impact_index", "type": "quantitative", "title": "Impact index (USD)" },
            "color": { "field": "category", "type": "nominal", "title": "Event type" },
            "tooltip": [
                { "field": "category", "type": "nominal" },
                { "field": "year", "type": "ordinal" },
                { "field": "impact_index", "type": "quantitative", "format": ",.0f" }
            ]
        }
    })
}

/// State choropleth of per-capita damage.
pub fn choropleth(title: &str, value_title: &str, rows: &[PerCapitaRow]) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": title,
        "width": 640,
        "height": 400,
        "data": {
            "url": US_STATES_TOPOJSON,
            "format": { "type": "topojson", "feature": "states" }
        },
        "transform": [{
            "lookup": "id",
            "from": {
                "data": { "values": rows },
                "key": "fips",
                "fields": ["state", "name", "per_capita"]
            }
        }],
        "projection": { "type": "albersUsa" },
        "mark": "geoshape",
        "encoding": {
            "color": {
                "field": "per_capita",
                "type": "quantitative",
                "title": value_title
            },
            "tooltip": [
                { "field": "name", "type": "nominal", "title": "State" },
                { "field": "per_capita", "type": "quantitative", "format": ",.2f" }
            ]
        }
    })
}
