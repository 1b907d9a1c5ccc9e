use anyhow::{bail, Context, Result};
use drone_core::{ColorMode, FormationId, Swarm, SwarmConfig};
use drone_shared::FrameSnapshot;
use std::io::Write;

/// How long to run and how often to report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOptions {
    pub ticks: u64,
    pub dt: f32,
    pub every: u64,
    pub seed: Option<u64>,
    pub until_settled: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ticks: 600,
            dt: 1.0 / 60.0,
            every: 60,
            seed: None,
            until_settled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub frames: usize,
    pub settled: bool,
}

/// Simulate `config` and write one JSON frame per line to `out`.
///
/// A frame goes out every `every` ticks, and the last tick always produces one.
pub fn run<W: Write>(config: SwarmConfig, options: RunOptions, out: &mut W) -> Result<RunSummary> {
    if options.every == 0 {
        bail!("--every must be at least 1");
    }
    if !options.dt.is_finite() || options.dt <= 0.0 {
        bail!("--dt must be a positive number of seconds, got {}", options.dt);
    }

    let mut swarm = match options.seed {
        Some(seed) => Swarm::with_seed(config, seed),
        None => Swarm::new(config),
    };
    log::info!(
        "Running {} drones in formation {} for up to {} ticks",
        swarm.drones().len(),
        swarm.config().formation,
        options.ticks
    );

    let mut frames = 0;
    let mut last_written = None;
    while swarm.tick_count() < options.ticks {
        swarm.tick(options.dt);
        let tick = swarm.tick_count();
        let settled = swarm.is_settled();
        let stop = settled && options.until_settled;

        if tick % options.every == 0 || stop {
            write_frame(&swarm, out)?;
            frames += 1;
            last_written = Some(tick);
        }
        if tick % options.every == 0 {
            log::debug!("Tick {}: settled = {}", tick, settled);
        }
        if stop {
            log::info!("Swarm settled after {} ticks", tick);
            break;
        }
    }

    if last_written != Some(swarm.tick_count()) {
        write_frame(&swarm, out)?;
        frames += 1;
    }
    out.flush().context("Failed to flush output")?;

    let summary = RunSummary {
        ticks: swarm.tick_count(),
        frames,
        settled: swarm.is_settled(),
    };
    log::info!(
        "Done: {} ticks, {} frames, settled = {}",
        summary.ticks,
        summary.frames,
        summary.settled
    );
    Ok(summary)
}

fn write_frame<W: Write>(swarm: &Swarm, out: &mut W) -> Result<()> {
    let frame = FrameSnapshot::capture(swarm);
    serde_json::to_writer(&mut *out, &frame).context("Failed to encode frame")?;
    writeln!(out).context("Failed to write frame")?;
    Ok(())
}

/// Print the formation catalog and the color modes.
pub fn list<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Formations:")?;
    for id in FormationId::ALL {
        writeln!(out, "  {:<16} {:?}", id.as_str(), id.kind())?;
    }
    writeln!(out, "Color modes:")?;
    for mode in ColorMode::ALL {
        let note = if mode.is_time_driven() { " (animated)" } else { "" };
        writeln!(out, "  {}{}", mode.as_str(), note)?;
    }
    Ok(())
}
