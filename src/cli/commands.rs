use crate::analyzers::RainfallAnalyzer;
use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::error::{RainfallError, Result};
use crate::models::{Station, StationRegistry};
use crate::processors::IntegrityChecker;
use crate::readers::StationLoader;
use crate::utils::filename::{analysed_file_path, raw_file_path};
use crate::utils::progress::ProgressReporter;
use crate::utils::settings::Settings;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let settings = match cli.config {
        Some(ref path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    setup_logging(cli.verbose, &settings.log_level, cli.log_file.as_deref())?;

    let loader = StationLoader::new().with_base_dir(&settings.base_dir);
    let directory_or_default = |directory: Option<String>| {
        directory
            .or_else(|| settings.directory.clone())
            .unwrap_or_default()
    };

    match cli.command {
        Commands::Load {
            directory,
            stations,
            format,
            rows,
        } => {
            let directory = directory_or_default(directory);
            let rows = rows.unwrap_or(settings.preview_rows);
            let json = format == OutputFormat::Json;

            let progress =
                ProgressReporter::new(stations.len() as u64, "Loading stations...", json)?;
            let mut registry = StationRegistry::new();
            let mut failures = 0;

            for name in &stations {
                progress.set_message(&format!("Loading {}...", name));
                if let Err(e) = registry.load(&loader, &directory, name) {
                    progress.println(&format!("✗ {}: {}", name, e));
                    failures += 1;
                }
                progress.increment(1);
            }

            progress.finish_with_message(&format!(
                "Loaded {} of {} stations",
                stations.len() - failures,
                stations.len()
            ));

            match format {
                OutputFormat::Json => {
                    let loaded: Vec<&Station> = registry.iter().collect();
                    println!("{}", serde_json::to_string_pretty(&loaded)?);
                }
                OutputFormat::Table => {
                    let analyzer = RainfallAnalyzer::new();
                    for station in registry.iter() {
                        let stats = analyzer.analyze(station)?;
                        println!("\n{}", stats.detailed_summary());
                        println!("\n{}", monthly_table(station, rows));
                    }
                }
            }

            if failures > 0 {
                return Err(RainfallError::LoadFailures(failures));
            }
        }

        Commands::Check { directory, station } => {
            let directory = directory_or_default(directory);

            let progress =
                ProgressReporter::new_spinner(&format!("Checking {}...", station), false)?;
            let loaded = loader.load(&directory, &station)?;
            progress.finish_with_message(&format!("Loaded {} monthly records", loaded.len()));

            let checker = IntegrityChecker::new();
            let report = checker.check_station(&loaded);
            println!("\n{}", checker.generate_summary(&report));

            if report.is_clean() {
                println!("✅ All monthly records passed integrity checks");
            } else {
                println!("⚠️  Found {} integrity issues", report.violations.len());
            }
        }

        Commands::Paths { directory, station } => {
            let directory = directory_or_default(directory);
            let base = loader.base_dir();

            let analysed = analysed_file_path(base, &directory, &station);
            let raw = raw_file_path(base, &directory, &station);
            println!("Analysed: {}", analysed.display());
            println!("Raw:      {}", raw.display());

            match loader.resolve(&directory, &station) {
                Ok(source) if source.needs_cache() => println!(
                    "Reads:    {} (raw, analysed cache will be written)",
                    source.path().display()
                ),
                Ok(source) => println!("Reads:    {} (analysed)", source.path().display()),
                Err(e) => println!("Status:   {}", e),
            }
        }
    }

    Ok(())
}

/// First `rows` monthly records as a fixed-width table.
fn monthly_table(station: &Station, rows: usize) -> String {
    let mut table = format!(
        "{:<6} {:<10} {:>10} {:>8} {:>8}\n",
        "Year", "Month", "Total", "Min", "Max"
    );

    for record in station.values().take(rows) {
        table.push_str(&format!(
            "{:<6} {:<10} {:>10.2} {:>8.2} {:>8.2}\n",
            record.year(),
            record.human_month_name(),
            record.total(),
            record.min(),
            record.max()
        ));
    }

    if station.len() > rows {
        table.push_str(&format!("... {} more months\n", station.len() - rows));
    }

    table
}

/// Set up structured logging on stderr, or into `log_file` when given.
fn setup_logging(verbose: bool, log_level: &str, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rainfall_analyser={}", level)));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_level(true)
                        .with_writer(std::io::stderr)
                        .compact(),
                )
                .init();
        }
    }

    debug!("Logging initialized at level: {}", level);
    Ok(())
}
