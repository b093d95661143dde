//! Storm Events CSV loader.
//!
//! Reads the export (plain, `.gz` or `.bz2`), parses each row's begin date
//! and keeps the rows inside the analysis window.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use bzip2::read::MultiBzDecoder;
use chrono::{NaiveDate, NaiveDateTime};
use flate2::read::MultiGzDecoder;
use serde::Deserialize;
use tracing::{debug, info};

use crate::stats::RunStats;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "EVTYPE",
    "FATALITIES",
    "INJURIES",
    "PROPDMG",
    "PROPDMGEXP",
    "CROPDMG",
    "CROPDMGEXP",
    "STATE",
    "BGN_DATE",
];

/// Field values meaning "no value", besides the empty field.
const MISSING_TOKENS: &[&str] = &["NA"];

const DATETIME_FORMATS: &[&str] = &["%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// One row of the export as it appears on disk.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "EVTYPE", default)]
    event_type: String,
    #[serde(rename = "FATALITIES", default, deserialize_with = "csv::invalid_option")]
    fatalities: Option<f64>,
    #[serde(rename = "INJURIES", default, deserialize_with = "csv::invalid_option")]
    injuries: Option<f64>,
    #[serde(rename = "PROPDMG", default, deserialize_with = "csv::invalid_option")]
    prop_mantissa: Option<f64>,
    #[serde(rename = "PROPDMGEXP", default)]
    prop_code: Option<String>,
    #[serde(rename = "CROPDMG", default, deserialize_with = "csv::invalid_option")]
    crop_mantissa: Option<f64>,
    #[serde(rename = "CROPDMGEXP", default)]
    crop_code: Option<String>,
    #[serde(rename = "STATE", default)]
    state: String,
    #[serde(rename = "BGN_DATE", default)]
    begin_date: String,
}

/// A storm event as read from the source, with its begin date parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEventRecord {
    pub event_type: String,
    pub fatalities: Option<f64>,
    pub injuries: Option<f64>,
    pub prop_mantissa: Option<f64>,
    pub prop_code: Option<String>,
    pub crop_mantissa: Option<f64>,
    pub crop_code: Option<String>,
    pub state: String,
    pub begin: NaiveDateTime,
}

/// Opens `path`, transparently decompressing `.gz` and `.bz2` files.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let buffered = BufReader::new(file);

    let reader: Box<dyn Read> = match path.extension().and_then(OsStr::to_str) {
        Some("gz") => Box::new(MultiGzDecoder::new(buffered)),
        Some("bz2") => Box::new(MultiBzDecoder::new(buffered)),
        _ => Box::new(buffered),
    };
    Ok(reader)
}

/// Loads every in-window record from the file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be opened or decompressed, if a required column
/// is missing, or if the CSV framing is malformed. Rows with unparseable
/// dates are skipped and counted instead.
#[tracing::instrument(skip(path, stats), fields(path = %path.display()))]
pub fn load(path: &Path, cutoff_year: i32, stats: &mut RunStats) -> Result<Vec<RawEventRecord>> {
    let reader = open_input(path)?;
    read_records(reader, cutoff_year, stats)
        .with_context(|| format!("failed to read storm events from {}", path.display()))
}

/// Parses CSV from `reader` and keeps rows beginning after `cutoff_year`.
pub fn read_records<R: Read>(
    reader: R,
    cutoff_year: i32,
    stats: &mut RunStats,
) -> Result<Vec<RawEventRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers().context("failed to read CSV header")?.clone();
    let missing: Vec<_> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.iter().any(|h| h == **c))
        .collect();
    if !missing.is_empty() {
        bail!("input is missing required columns: {missing:?}");
    }

    let mut records = Vec::new();

    for (idx, result) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("malformed CSV at data row {}", idx + 1))?;
        stats.rows_read += 1;

        let Some(begin) = parse_begin_date(&row.begin_date) else {
            debug!(row = idx + 1, value = %row.begin_date, "Unparseable begin date");
            stats.rows_bad_date += 1;
            continue;
        };

        if !in_window(begin, cutoff_year) {
            stats.rows_before_window += 1;
            continue;
        }

        records.push(RawEventRecord {
            event_type: row.event_type,
            fatalities: row.fatalities,
            injuries: row.injuries,
            prop_mantissa: row.prop_mantissa,
            prop_code: present(row.prop_code),
            crop_mantissa: row.crop_mantissa,
            crop_code: present(row.crop_code),
            state: row.state.trim().to_string(),
            begin,
        });
    }

    stats.rows_in_window = records.len();
    info!(
        rows_read = stats.rows_read,
        rows_in_window = stats.rows_in_window,
        rows_before_window = stats.rows_before_window,
        rows_bad_date = stats.rows_bad_date,
        "Storm events loaded"
    );

    Ok(records)
}

/// Parses a begin date in any of the accepted layouts.
pub fn parse_begin_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Whether `begin` falls strictly after the last day of `cutoff_year`.
pub fn in_window(begin: NaiveDateTime, cutoff_year: i32) -> bool {
    NaiveDate::from_ymd_opt(cutoff_year, 12, 31).is_some_and(|last| begin.date() > last)
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && !MISSING_TOKENS.contains(&v.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const HEADER: &str = "STATE__,BGN_DATE,STATE,EVTYPE,FATALITIES,INJURIES,PROPDMG,PROPDMGEXP,CROPDMG,CROPDMGEXP\n";

    fn read(body: &str) -> (Result<Vec<RawEventRecord>>, RunStats) {
        let mut stats = RunStats::default();
        let csv = format!("{HEADER}{body}");
        let result = read_records(csv.as_bytes(), 1995, &mut stats);
        (result, stats)
    }

    #[test]
    fn test_parse_noaa_timestamp() {
        let dt = parse_begin_date("4/18/1950 0:00:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (1950, 4, 18));
    }

    #[test]
    fn test_parse_iso_date() {
        let dt = parse_begin_date("2011-04-27").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2011, 4, 27));
        assert!(parse_begin_date("yesterday").is_none());
    }

    #[test]
    fn test_window_boundary() {
        let last = parse_begin_date("12/31/1995 23:59:59").unwrap();
        let first = parse_begin_date("1/1/1996 0:00:00").unwrap();
        assert!(!in_window(last, 1995));
        assert!(in_window(first, 1995));
    }

    #[test]
    fn test_read_records_filters_window() {
        let (result, stats) = read(
            "1,1/3/1995 0:00:00,AL,TORNADO,0,0,0,,0,\n\
             1,1/3/1996 0:00:00,AL,TORNADO,1,2,25,K,0,\n",
        );
        let records = result.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fatalities, Some(1.0));
        assert_eq!(records[0].prop_code.as_deref(), Some("K"));
        assert_eq!(records[0].crop_code, None);
        assert_eq!(stats.rows_read, 2);
        assert_eq!(stats.rows_before_window, 1);
        assert_eq!(stats.rows_in_window, 1);
    }

    #[test]
    fn test_bad_dates_are_skipped() {
        let (result, stats) = read("1,not a date,AL,HAIL,0,0,0,,0,\n");
        assert!(result.unwrap().is_empty());
        assert_eq!(stats.rows_bad_date, 1);
    }

    #[test]
    fn test_lenient_numerics_and_na_codes() {
        let (result, _) = read("48,6/1/2000 0:00:00,TX,HAIL,NA,x,,NA,5,m\n");
        let record = &result.unwrap()[0];
        assert_eq!(record.fatalities, None);
        assert_eq!(record.injuries, None);
        assert_eq!(record.prop_mantissa, None);
        assert_eq!(record.prop_code, None);
        assert_eq!(record.crop_mantissa, Some(5.0));
        assert_eq!(record.crop_code.as_deref(), Some("m"));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let mut stats = RunStats::default();
        let csv = "BGN_DATE,EVTYPE\n1/1/2000,HAIL\n";
        let err = read_records(csv.as_bytes(), 1995, &mut stats).unwrap_err();
        assert!(err.to_string().contains("missing required columns"));
    }

    #[test]
    fn test_padded_header_names_are_matched() {
        let mut stats = RunStats::default();
        let csv = "STATE__, BGN_DATE ,STATE,EVTYPE ,FATALITIES,INJURIES,PROPDMG,PROPDMGEXP,CROPDMG,CROPDMGEXP\n\
                   48,6/1/2000 0:00:00,TX,HAIL,1,0,2,K,0,\n";
        let records = read_records(csv.as_bytes(), 1995, &mut stats).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event_type, "HAIL");
        assert_eq!(records[0].begin.year(), 2000);
        assert_eq!(stats.rows_bad_date, 0);
    }

    #[test]
    fn test_ragged_rows_are_fatal() {
        let (result, _) = read("1,1/3/1996 0:00:00,AL\n");
        assert!(result.is_err());
    }
}
