use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::analyzers::aggregate::{aggregate, totals_by_state};
use crate::analyzers::impact::{ImpactWeights, score};
use crate::analyzers::per_capita::per_capita;
use crate::analyzers::prepare::prepare;
use crate::analyzers::trend::densify;
use crate::analyzers::types::{
    CategoryAggregate, GroupBy, ImpactRow, Metric, NormalizedRecord, PerCapitaRow, RankedRow,
    TrendPoint, UnmappedLabel,
};
use crate::analyzers::utility::top_n;
use crate::charts::{bar_chart, choropleth, trend_chart};
use crate::config::AnalysisConfig;
use crate::loader;
use crate::normalizer::is_catch_all;
use crate::output::{chart_path, table_path, write_json, write_table};
use crate::population::REFERENCE_YEAR;
use crate::stats::RunStats;

pub const SUMMARY_FILE: &str = "summary.json";
pub const UNMAPPED_LABELS: &str = "unmapped_labels";

/// Every table the reporters render.
#[derive(Debug, Default)]
pub struct Reports {
    pub top_fatalities: Vec<RankedRow>,
    pub top_injuries: Vec<RankedRow>,
    pub top_property_damage: Vec<RankedRow>,
    pub top_crop_damage: Vec<RankedRow>,
    pub top_impact: Vec<ImpactRow>,
    pub impact_trend: Vec<TrendPoint>,
    pub property_per_capita: Vec<PerCapitaRow>,
    pub crop_per_capita: Vec<PerCapitaRow>,
}

/// Loads `input`, builds every report and writes the artifacts to
/// `output_dir` along with `summary.json` and the unmapped-label audit.
///
/// Artifact write failures are logged and recorded in the returned stats
/// without aborting the remaining reports.
///
/// # Errors
///
/// Fails if the input cannot be loaded or `output_dir` cannot be created.
#[tracing::instrument(skip_all, fields(input = %input.display(), output_dir = %output_dir.display()))]
pub fn analyze(input: &Path, output_dir: &Path, config: &AnalysisConfig) -> Result<RunStats> {
    let mut stats = RunStats::new(&input.display().to_string());

    let raw = loader::load(input, config.cutoff_year, &mut stats)?;
    let prepared = prepare(raw, &mut stats);

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let reports = build_reports(&prepared.records, config);
    write_reports(&reports, output_dir, &mut stats);
    publish(output_dir, UNMAPPED_LABELS, &prepared.unmapped, None, &mut stats);

    let summary_path = output_dir.join(SUMMARY_FILE);
    if let Err(e) = write_json(&summary_path, &stats) {
        error!(error = %e, "Failed to write run summary");
        stats
            .artifacts_failed
            .insert(SUMMARY_FILE.to_string(), format!("{e:#}"));
    }

    info!(
        written = stats.artifacts_written.len(),
        failed = stats.artifacts_failed.len(),
        "Reports complete"
    );
    Ok(stats)
}

/// Loads `input` and returns the labels that fell through to the catch-all.
pub fn audit(input: &Path, config: &AnalysisConfig) -> Result<(Vec<UnmappedLabel>, RunStats)> {
    let mut stats = RunStats::new(&input.display().to_string());
    let raw = loader::load(input, config.cutoff_year, &mut stats)?;
    let prepared = prepare(raw, &mut stats);
    Ok((prepared.unmapped, stats))
}

/// Aggregates, scores and ranks normalized records into report tables.
pub fn build_reports(records: &[NormalizedRecord], config: &AnalysisConfig) -> Reports {
    let weights = ImpactWeights::from(config);
    let by_category = aggregate(records, GroupBy::Category);

    let scored: Vec<ImpactRow> = score(&by_category, &weights)
        .into_iter()
        .filter(|r| !is_catch_all(r.category))
        .collect();
    let top_impact = top_n(&scored, config.top_n_impact, |r| r.impact_index);

    for (i, row) in top_impact.iter().enumerate() {
        info!(
            rank = i + 1,
            category = row.category,
            impact_index = row.impact_index,
            "Top impact"
        );
    }

    let top_categories: Vec<&'static str> = top_impact.iter().map(|r| r.category).collect();
    let last_year = records.iter().map(|r| r.year).max();
    let years = config.first_year()..=last_year.unwrap_or(config.cutoff_year);
    let by_year = aggregate(records, GroupBy::CategoryYear);
    let impact_trend = densify(&by_year, &top_categories, years, &weights);

    let states = totals_by_state(records);

    Reports {
        top_fatalities: ranked(&by_category, Metric::Fatalities, config.top_n_harm),
        top_injuries: ranked(&by_category, Metric::Injuries, config.top_n_harm),
        top_property_damage: ranked(&by_category, Metric::PropertyDamage, config.top_n_harm),
        top_crop_damage: ranked(&by_category, Metric::CropDamage, config.top_n_harm),
        top_impact,
        impact_trend,
        property_per_capita: per_capita(&states, Metric::PropertyDamage),
        crop_per_capita: per_capita(&states, Metric::CropDamage),
    }
}

/// Top `n` categories by `metric`, catch-all excluded.
fn ranked(by_category: &[CategoryAggregate], metric: Metric, n: usize) -> Vec<RankedRow> {
    let candidates: Vec<&CategoryAggregate> = by_category
        .iter()
        .filter(|a| !is_catch_all(a.key.category))
        .collect();

    top_n(&candidates, n, |a| a.totals.get(metric))
        .into_iter()
        .enumerate()
        .map(|(i, a)| RankedRow {
            rank: i + 1,
            category: a.key.category,
            value: a.totals.get(metric),
        })
        .collect()
}

/// Writes every report artifact; failures are recorded, not propagated.
pub fn write_reports(reports: &Reports, dir: &Path, stats: &mut RunStats) {
    let bars = [
        ("top_fatalities", "Top event types by fatalities", "Fatalities", &reports.top_fatalities),
        ("top_injuries", "Top event types by injuries", "Injuries", &reports.top_injuries),
        (
            "top_property_damage",
            "Top event types by property damage",
            "Property damage (USD)",
            &reports.top_property_damage,
        ),
        (
            "top_crop_damage",
            "Top event types by crop damage",
            "Crop damage (USD)",
            &reports.top_crop_damage,
        ),
    ];
    for (name, title, value_title, rows) in bars {
        let chart = bar_chart(title, value_title, rows);
        publish(dir, name, rows, Some(&chart), stats);
    }

    let impact_bars: Vec<RankedRow> = reports
        .top_impact
        .iter()
        .enumerate()
        .map(|(i, r)| RankedRow {
            rank: i + 1,
            category: r.category,
            value: r.impact_index,
        })
        .collect();
    let chart = bar_chart("Top event types by combined impact", "Impact index (USD)", &impact_bars);
    publish(dir, "top_impact", &reports.top_impact, Some(&chart), stats);

    let chart = trend_chart("Annual impact of the top event types", &reports.impact_trend);
    publish(dir, "impact_trend", &reports.impact_trend, Some(&chart), stats);

    let maps = [
        ("property_damage_per_capita", "Property damage", &reports.property_per_capita),
        ("crop_damage_per_capita", "Crop damage", &reports.crop_per_capita),
    ];
    for (name, what, rows) in maps {
        let title = format!("{what} per resident ({REFERENCE_YEAR} population)");
        let chart = choropleth(&title, "USD per resident", rows);
        publish(dir, name, rows, Some(&chart), stats);
    }
}

/// Writes one artifact and records the outcome in `stats`.
fn publish<T: Serialize>(
    dir: &Path,
    name: &str,
    rows: &[T],
    chart: Option<&Value>,
    stats: &mut RunStats,
) {
    match write_artifact(dir, name, rows, chart) {
        Ok(()) => {
            info!(artifact = name, rows = rows.len(), "Artifact written");
            stats.artifacts_written.push(name.to_string());
        }
        Err(e) => {
            error!(artifact = name, error = %e, "Failed to write artifact");
            stats.artifacts_failed.insert(name.to_string(), format!("{e:#}"));
        }
    }
}

#[tracing::instrument(skip(dir, rows, chart))]
fn write_artifact<T: Serialize>(dir: &Path, name: &str, rows: &[T], chart: Option<&Value>) -> Result<()> {
    write_table(&table_path(dir, name), rows)?;
    if let Some(chart) = chart {
        write_json(&chart_path(dir, name), chart)?;
    }
    Ok(())
}
