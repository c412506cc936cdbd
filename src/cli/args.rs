use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rainfall-analyser")]
#[command(about = "Monthly rainfall statistics for Bureau of Meteorology stations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: ./rainfall.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load one or more stations, writing the analysed cache where missing
    Load {
        #[arg(short, long, help = "Directory holding the station CSV files")]
        directory: Option<String>,

        #[arg(short = 's', long = "station", required = true, help = "Station name (repeatable)")]
        stations: Vec<String>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        #[arg(short, long, help = "Monthly rows to print per station [default: 12]")]
        rows: Option<usize>,
    },

    /// Load a station and report records that break the monthly invariants
    Check {
        #[arg(short, long, help = "Directory holding the station CSV files")]
        directory: Option<String>,

        #[arg(short, long)]
        station: String,
    },

    /// Show which file a load would read
    Paths {
        #[arg(short, long, help = "Directory holding the station CSV files")]
        directory: Option<String>,

        #[arg(short, long)]
        station: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
