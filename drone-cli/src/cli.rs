use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless drone swarm formation simulator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the simulator and stream JSON frames to stdout
    Run(RunArgs),
    /// List formations and color modes
    List,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// JSON settings file; flags below override its fields
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Formation name (e.g. 'circle', 'indian_flag')
    #[arg(short, long)]
    pub formation: Option<String>,

    /// Number of drones
    #[arg(short = 'n', long)]
    pub swarm_size: Option<usize>,

    /// Formation scale
    #[arg(long)]
    pub scale: Option<f32>,

    /// Formation anchor as X,Y,Z
    #[arg(short, long, value_parser = parse_anchor, allow_hyphen_values = true)]
    pub anchor: Option<[f32; 3]>,

    /// Color mode (e.g. 'rainbow', 'by_distance')
    #[arg(short, long)]
    pub color_mode: Option<String>,

    /// Animation speed multiplier
    #[arg(long)]
    pub speed: Option<f32>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    pub ticks: u64,

    /// Seconds of simulated time per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Emit a frame every N ticks
    #[arg(short, long, default_value_t = 60)]
    pub every: u64,

    /// Seed for reproducible spawn positions and stochastic formations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop as soon as every drone has reached its target
    #[arg(short, long)]
    pub until_settled: bool,
}

/// Parse `X,Y,Z` into an anchor.
pub fn parse_anchor(s: &str) -> Result<[f32; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("anchor must be X,Y,Z, got '{}'", s);
    }
    let mut anchor = [0.0f32; 3];
    for (axis, part) in anchor.iter_mut().zip(&parts) {
        *axis = part
            .parse()
            .with_context(|| format!("invalid anchor coordinate '{}'", part))?;
        if !axis.is_finite() {
            bail!("anchor coordinate '{}' is not finite", part);
        }
    }
    Ok(anchor)
}
