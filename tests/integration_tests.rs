use std::fs;
use std::io::Write;
use std::path::PathBuf;

use bzip2::write::BzEncoder;
use flate2::Compression;
use flate2::write::GzEncoder;
use storm_impact::analyzers::aggregate::aggregate;
use storm_impact::analyzers::analyzer::{SUMMARY_FILE, analyze};
use storm_impact::analyzers::impact::{ImpactWeights, impact_index};
use storm_impact::analyzers::prepare::prepare;
use storm_impact::analyzers::types::GroupBy;
use storm_impact::config::AnalysisConfig;
use storm_impact::loader::read_records;
use storm_impact::stats::RunStats;

const HEADER: &str =
    "STATE__,BGN_DATE,BGN_TIME,STATE,EVTYPE,FATALITIES,INJURIES,PROPDMG,PROPDMGEXP,CROPDMG,CROPDMGEXP\n";

const TWO_TSTM_WIND_ROWS: &str = "\
48,7/4/2000 0:00:00,1400,TX,tstm wind,1,0,10,k,0,NA
48,7/5/2000 0:00:00,1500,TX,TSTM WIND,0,2,0,NA,5,m
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("storm_impact_it_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_two_record_scenario() {
    let csv = format!("{HEADER}{TWO_TSTM_WIND_ROWS}");
    let mut stats = RunStats::default();
    let config = AnalysisConfig::default();

    let raw = read_records(csv.as_bytes(), config.cutoff_year, &mut stats).unwrap();
    let prepared = prepare(raw, &mut stats);
    assert!(prepared.records.iter().all(|r| r.category == "thunderstorm wind"));

    let by_year = aggregate(&prepared.records, GroupBy::CategoryYear);
    assert_eq!(by_year.len(), 1);
    let agg = &by_year[0];
    assert_eq!(agg.key.year, Some(2000));
    assert_eq!(agg.totals.fatalities, 1.0);
    assert_eq!(agg.totals.injuries, 2.0);
    assert_eq!(agg.totals.property_damage, 10_000.0);
    assert_eq!(agg.totals.crop_damage, 5_000_000.0);

    let weights = ImpactWeights::from(&config);
    assert_eq!(impact_index(&agg.totals, &weights), 16_842_000.0);
}

#[test]
fn test_full_pipeline_writes_every_artifact() {
    let dir = scratch_dir("full");
    let input = dir.join("StormData.csv");
    let body = format!(
        "{HEADER}{TWO_TSTM_WIND_ROWS}\
         1,1/1/1995 0:00:00,0800,AL,TORNADO,50,100,5,B,0,\n\
         40,5/3/1999 0:00:00,1800,OK,TORNADO,36,583,1,B,0,\n\
         22,8/29/2005 0:00:00,0600,LA,HURRICANE/TYPHOON,0,0,31.3,B,0,\n\
         6,1/1/2006 0:00:00,0000,CA,FLOOD,0,0,115,B,32.5,M\n\
         72,9/20/2017 0:00:00,0600,PR,HURRICANE,0,0,3,0,0,\n\
         17,7/13/1999 0:00:00,1200,IL,EXCESSIVE HEAT,99,0,0,,0,\n\
         17,7/14/1999 0:00:00,1200,IL,Sharknado,3,0,7,+,0,\n"
    );
    fs::write(&input, body).unwrap();

    let out = dir.join("reports");
    let stats = analyze(&input, &out, &AnalysisConfig::default()).unwrap();

    assert!(!stats.has_failures(), "{:?}", stats.artifacts_failed);
    assert_eq!(stats.rows_read, 9);
    assert_eq!(stats.rows_before_window, 1);
    assert_eq!(stats.rows_disallowed_code, 1);
    assert_eq!(stats.unrecognized_codes.get("+"), Some(&1));

    for name in [
        "top_fatalities",
        "top_injuries",
        "top_property_damage",
        "top_crop_damage",
        "top_impact",
        "impact_trend",
        "property_damage_per_capita",
        "crop_damage_per_capita",
    ] {
        assert!(out.join(format!("{name}.csv")).exists(), "{name}.csv");
        assert!(out.join(format!("{name}.vl.json")).exists(), "{name}.vl.json");
    }
    assert!(out.join("unmapped_labels.csv").exists());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join(SUMMARY_FILE)).unwrap()).unwrap();
    assert_eq!(summary["rows_read"], 9);

    let top_fatalities = fs::read_to_string(out.join("top_fatalities.csv")).unwrap();
    let first_row = top_fatalities.lines().nth(1).unwrap();
    assert!(first_row.starts_with("1,heat,"), "{first_row}");
    assert!(!top_fatalities.contains("other"));

    let unmapped = fs::read_to_string(out.join("unmapped_labels.csv")).unwrap();
    assert!(unmapped.contains("sharknado,1"));

    // 1996..=2006 for every ranked category
    let trend = fs::read_to_string(out.join("impact_trend.csv")).unwrap();
    let categories = 5;
    assert_eq!(trend.lines().count(), 1 + categories * 11);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_gzip_input() {
    let dir = scratch_dir("gzip");
    let input = dir.join("StormData.csv.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(format!("{HEADER}{TWO_TSTM_WIND_ROWS}").as_bytes())
        .unwrap();
    fs::write(&input, encoder.finish().unwrap()).unwrap();

    let out = dir.join("reports");
    let stats = analyze(&input, &out, &AnalysisConfig::default()).unwrap();
    assert_eq!(stats.records_normalized, 2);
    assert_eq!(stats.distinct_categories, 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_bzip2_input() {
    let dir = scratch_dir("bzip2");
    let input = dir.join("StormData.csv.bz2");

    let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder
        .write_all(format!("{HEADER}{TWO_TSTM_WIND_ROWS}").as_bytes())
        .unwrap();
    fs::write(&input, encoder.finish().unwrap()).unwrap();

    let out = dir.join("reports");
    let stats = analyze(&input, &out, &AnalysisConfig::default()).unwrap();
    assert_eq!(stats.rows_read, 2);
    assert_eq!(stats.records_normalized, 2);
    assert!(out.join(SUMMARY_FILE).exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_unreadable_input_is_fatal() {
    let dir = scratch_dir("missing");
    let result = analyze(&dir.join("nope.csv"), &dir.join("reports"), &AnalysisConfig::default());
    assert!(result.is_err());
    assert!(!dir.join("reports").exists());

    let _ = fs::remove_dir_all(&dir);
}
