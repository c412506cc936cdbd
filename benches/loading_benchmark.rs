use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rainfall_analyser::models::{MonthlyRecord, Station};
use rainfall_analyser::readers::StationLoader;
use std::fs;
use tempfile::TempDir;

// Daily observations for `years` years starting in 1900
fn create_raw_station(dir: &TempDir, years: i32) {
    fs::create_dir_all(dir.path().join("bom")).unwrap();

    let mut content =
        String::from("Product code,Station number,Year,Month,Day,Rainfall,Period,Quality\n");
    for year in 1900..1900 + years {
        for month in 1..=12 {
            for day in 1..=28 {
                let rainfall = if day % 3 == 0 {
                    String::new()
                } else {
                    format!("{:.1}", ((year + month * day) % 17) as f64 / 2.0)
                };
                content.push_str(&format!(
                    "IDCJAC0009,023090,{},{:02},{:02},{},1,Y\n",
                    year, month, day, rainfall
                ));
            }
        }
    }

    fs::write(dir.path().join("bom/bench.csv"), content).unwrap();
}

fn benchmark_raw_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_load");

    for years in [10, 50, 100] {
        let dir = TempDir::new().unwrap();
        create_raw_station(&dir, years);
        let loader = StationLoader::new().with_base_dir(dir.path());
        let cache = dir.path().join("bom/bench_analysed.csv");

        group.bench_with_input(BenchmarkId::from_parameter(years), &years, |b, _| {
            b.iter(|| {
                let _ = fs::remove_file(&cache);
                black_box(loader.load("bom", "bench").unwrap())
            })
        });
    }

    group.finish();
}

fn benchmark_cached_load(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    create_raw_station(&dir, 100);
    let loader = StationLoader::new().with_base_dir(dir.path());
    loader.load("bom", "bench").unwrap();

    c.bench_function("cached_load_100_years", |b| {
        b.iter(|| black_box(loader.load("bom", "bench").unwrap()))
    });
}

fn benchmark_distinct_years(c: &mut Criterion) {
    let mut station = Station::new("bench");
    for year in 1900..2000 {
        for month in 1..=12 {
            let record = MonthlyRecord::seed(year, month, month as f64);
            station.put(record.key(), record);
        }
    }

    c.bench_function("distinct_years_1200_months", |b| {
        b.iter(|| black_box(station.distinct_years()))
    });
}

criterion_group!(
    benches,
    benchmark_raw_load,
    benchmark_cached_load,
    benchmark_distinct_years
);
criterion_main!(benches);
