//! blockgame - headless driver for the voxel prototype core.
//!
//! Generates a seeded world, steps the player simulation from a scripted
//! input source, and logs the run. Rendering, windowing, and live input are
//! external collaborators; this binary exercises the core the way they
//! would, one tick per frame.

mod config;
mod script;
mod sim;

use anyhow::{Context, Result};
use blockgame_world::WorldGenerator;
use config::SimConfig;
use script::ScriptPlayer;
use sim::Simulation;
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting blockgame v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1))?;
    let cfg = match &cli.config {
        Some(path) => SimConfig::load_from_path(path),
        None => SimConfig::load(),
    };

    // No seed on the command line: self-select one and say so, since the
    // run cannot be reproduced without it.
    let seed = match cli.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            info!(seed, "no --seed given, selected one");
            seed
        }
    };

    let world = WorldGenerator::new(seed).generate();
    info!(
        seed,
        blocks = world.grid.len(),
        spawn = ?world.spawn,
        tree_base = ?world.tree_base,
        "world ready"
    );

    let mut script = match &cli.script {
        Some(path) => ScriptPlayer::from_path(path)?,
        None => ScriptPlayer::demo(),
    };

    let mut sim = Simulation::new(world, cfg.tuning(), cfg.reach_distance);
    let dt = 1.0 / cfg.tick_rate;
    for _ in 0..cli.ticks {
        let (input, edit) = script.advance(dt);
        if let Some(edit) = edit {
            sim.queue_edit(edit);
        }
        sim.tick(&input, dt);
    }

    let body = sim.body();
    info!(
        ticks = sim.ticks(),
        position = ?body.position,
        grounded = body.grounded,
        blocks = sim.grid().len(),
        script_finished = script.finished(),
        "run complete"
    );
    Ok(())
}

struct CliOptions {
    seed: Option<u64>,
    ticks: u64,
    script: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut options = Self {
            seed: None,
            ticks: 600,
            script: None,
            config: None,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().context("--seed requires a value")?;
                    options.seed =
                        Some(value.parse().with_context(|| format!("bad seed {value:?}"))?);
                }
                "--ticks" => {
                    let value = args.next().context("--ticks requires a value")?;
                    options.ticks = value
                        .parse()
                        .with_context(|| format!("bad tick count {value:?}"))?;
                }
                "--script" => {
                    options.script = Some(PathBuf::from(
                        args.next().context("--script requires a path")?,
                    ));
                }
                "--config" => {
                    options.config = Some(PathBuf::from(
                        args.next().context("--config requires a path")?,
                    ));
                }
                other => anyhow::bail!("unknown argument {other:?}"),
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions> {
        CliOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_without_arguments() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.seed, None);
        assert_eq!(options.ticks, 600);
        assert!(options.script.is_none());
    }

    #[test]
    fn parses_seed_and_ticks() {
        let options = parse(&["--seed", "42", "--ticks", "120"]).unwrap();
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.ticks, 120);
    }

    #[test]
    fn rejects_unknown_and_malformed_arguments() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["--seed", "not-a-number"]).is_err());
        assert!(parse(&["--seed"]).is_err());
    }
}
