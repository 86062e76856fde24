use anyhow::Result;
use clap::Parser;
use fastapaint::cli::Cli;
use fastapaint::pipeline::run;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    run(&cli)
}
