use anyhow::Context;
use clap::Parser;
use rainfall_analyser::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("rainfall-analyser failed")
}
