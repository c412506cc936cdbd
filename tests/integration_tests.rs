use pretty_assertions::assert_eq;
use rainfall_analyser::models::{make_key, Station};
use rainfall_analyser::processors::IntegrityChecker;
use rainfall_analyser::readers::{Dialect, StationLoader};
use rainfall_analyser::{RainfallError, StationRegistry};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RAW_HEADER: &str =
    "Product code,Bureau of Meteorology station number,Year,Month,Day,Rainfall amount (millimetres),Period over which rainfall was measured (days),Quality";

fn write_raw(dir: &Path, station: &str, rows: &[&str]) {
    fs::create_dir_all(dir.join("bom")).unwrap();
    let mut content = format!("{}\n", RAW_HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join(format!("bom/{}.csv", station)), content).unwrap();
}

fn tuples(station: &Station) -> Vec<(i32, i32, f64, f64, f64)> {
    station
        .values()
        .map(|r| (r.year(), r.month(), r.total(), r.min(), r.max()))
        .collect()
}

fn rounded(station: &Station) -> Vec<(i32, i32, String, String, String)> {
    station
        .values()
        .map(|r| {
            (
                r.year(),
                r.month(),
                format!("{:.2}", r.total()),
                format!("{:.2}", r.min()),
                format!("{:.2}", r.max()),
            )
        })
        .collect()
}

fn daily_rows() -> Vec<&'static str> {
    vec![
        "IDCJAC0009,023090,2001,01,01,0.2,1,Y",
        "IDCJAC0009,023090,2001,01,02,,,",
        "IDCJAC0009,023090,2001,01,03,13.4,1,Y",
        "IDCJAC0009,023090,1999,07,01,4.6,1,Y",
        "IDCJAC0009,023090,1999,07,02,1.0,1,N",
        "IDCJAC0009,023090,2001,02,01,0.0,1,Y",
        "IDCJAC0009,023090,2000,03,01,22.25,1,Y",
    ]
}

#[test]
fn test_raw_load_writes_cache_and_round_trips() {
    let dir = TempDir::new().unwrap();
    write_raw(dir.path(), "KentTown", &daily_rows());
    let loader = StationLoader::new().with_base_dir(dir.path());

    let from_raw = loader.load("bom", "KentTown").unwrap();
    let cache_path = dir.path().join("bom/KentTown_analysed.csv");
    assert!(cache_path.exists());

    let cache = fs::read_to_string(&cache_path).unwrap();
    let mut lines = cache.lines();
    assert_eq!(lines.next(), Some("year,month,total,min,max"));
    assert_eq!(lines.next(), Some("2001,1,13.60,0.00,13.40"));
    assert_eq!(cache.lines().count(), 1 + from_raw.len());

    assert_eq!(loader.resolve("bom", "KentTown").unwrap().dialect, Dialect::Analysed);
    let from_cache = loader.load("bom", "KentTown").unwrap();

    assert_eq!(rounded(&from_raw), rounded(&from_cache));
    assert_eq!(from_raw.distinct_years(), vec![2001, 1999, 2000]);
    assert_eq!(from_cache.distinct_years(), vec![2001, 1999, 2000]);
}

#[test]
fn test_cache_is_preferred_over_raw() {
    let dir = TempDir::new().unwrap();
    write_raw(dir.path(), "station", &["X,1,2001,01,01,99.0,1,Y"]);
    fs::write(
        dir.path().join("bom/station_analysed.csv"),
        "year,month,total,min,max\n1990,5,1.00,0.00,1.00\n",
    )
    .unwrap();

    let station = StationLoader::new()
        .with_base_dir(dir.path())
        .load("bom", "station")
        .unwrap();

    assert_eq!(tuples(&station), vec![(1990, 5, 1.0, 0.0, 1.0)]);
}

#[test]
fn test_monthly_aggregation() {
    let dir = TempDir::new().unwrap();
    write_raw(dir.path(), "KentTown", &daily_rows());

    let station = StationLoader::new()
        .with_base_dir(dir.path())
        .load("bom", "KentTown")
        .unwrap();

    let july = station.get(&make_key(1999, 7)).unwrap();
    assert_eq!(july.total(), 5.6);
    assert_eq!(july.min(), 1.0);
    assert_eq!(july.max(), 4.6);

    let february = station.get(&make_key(2001, 2)).unwrap();
    assert_eq!((february.total(), february.min(), february.max()), (0.0, 0.0, 0.0));

    assert_eq!(station.max_total_rainfall(), 22.25);
}

#[test]
fn test_failed_load_leaves_no_cache() {
    let dir = TempDir::new().unwrap();
    write_raw(
        dir.path(),
        "broken",
        &["X,1,2001,01,01,1.0,1,Y", "X,1,two thousand,01,02,1.0,1,Y"],
    );

    let err = StationLoader::new()
        .with_base_dir(dir.path())
        .load("bom", "broken")
        .unwrap_err();

    assert!(matches!(err, RainfallError::NonNumericValue { line: 3, .. }));
    assert!(err.is_load_failure());
    assert!(!dir.path().join("bom/broken_analysed.csv").exists());
}

#[test]
fn test_future_year_is_rejected_against_clock() {
    let dir = TempDir::new().unwrap();
    write_raw(dir.path(), "future", &["X,1,9999,01,01,1.0,1,Y"]);

    let err = StationLoader::new()
        .with_base_dir(dir.path())
        .load("bom", "future")
        .unwrap_err();

    assert!(matches!(err, RainfallError::InvalidYear { year: 9999, .. }));
}

#[test]
fn test_failure_messages() {
    let dir = TempDir::new().unwrap();
    let loader = StationLoader::new().with_base_dir(dir.path());

    assert_eq!(
        loader.load("", "station").unwrap_err().to_string(),
        "directory name required"
    );
    assert_eq!(
        loader.load("bom", "").unwrap_err().to_string(),
        "station name required"
    );
    assert!(loader
        .load("bom", "missing")
        .unwrap_err()
        .to_string()
        .starts_with("file does not exist"));

    write_raw(dir.path(), "empty", &[]);
    assert_eq!(
        loader.load("bom", "empty").unwrap_err().to_string(),
        "no rainfall data found"
    );
}

#[test]
fn test_registry_and_integrity() {
    let dir = TempDir::new().unwrap();
    write_raw(dir.path(), "KentTown", &daily_rows());
    let loader = StationLoader::new().with_base_dir(dir.path());

    let mut registry = StationRegistry::new();
    registry.load(&loader, "bom", "KentTown").unwrap();
    assert!(registry.load(&loader, "bom", "Nowhere").is_err());

    assert_eq!(registry.len(), 1);
    let station = registry.get("kenttown").unwrap();

    let report = IntegrityChecker::new().check_station(station);
    assert!(report.is_clean());
    assert_eq!(report.total_records, 4);
}
