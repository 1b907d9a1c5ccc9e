use anyhow::{Context, Result};
use clap::Parser;
use drone_cli::cli::{Cli, Command};
use drone_cli::runner::{self, RunOptions};
use drone_cli::settings;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::List => runner::list(&mut out).context("Failed to print catalog")?,
        Command::Run(args) => {
            log::info!("Drone swarm simulator starting...");
            let config = settings::resolve_config(&args)?;
            let options = RunOptions {
                ticks: args.ticks,
                dt: args.dt,
                every: args.every,
                seed: args.seed,
                until_settled: args.until_settled,
            };
            runner::run(config, options, &mut out).context("Simulation error")?;
        }
    }

    Ok(())
}
