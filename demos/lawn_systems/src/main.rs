//! # lawn_demo
//!
//! Runs the lawn demo for a fixed number of frames and logs a per-lane
//! summary. Set `RUST_LOG=lawn_systems=debug` to watch individual spawns.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ecs_frame::FrameConfig;
use lawn_components::{Counter, LaneState};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Frames to run when neither the CLI nor the config file sets a limit.
const DEFAULT_FRAMES: u64 = 300;

#[derive(Parser)]
#[command(name = "lawn_demo", about = "Spawn walkers into lanes and let them expire")]
struct Args {
    /// JSON frame config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run (overrides the config file)
    #[arg(short, long)]
    frames: Option<u64>,

    /// Frames per second (overrides the config file)
    #[arg(long)]
    frame_rate: Option<f64>,

    /// Number of lanes walkers are spread over
    #[arg(short, long, default_value_t = 5)]
    lanes: u8,

    /// Seconds between spawns
    #[arg(short, long, default_value_t = 1.0)]
    spawn_interval: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("lawn_demo=info".parse()?)
                .add_directive("ecs_frame=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FrameConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FrameConfig::default(),
    };
    match args.frames {
        Some(frames) => config = config.with_max_frames(frames),
        None if config.max_frames == 0 => config = config.with_max_frames(DEFAULT_FRAMES),
        None => {}
    }
    if let Some(rate) = args.frame_rate {
        config = config.with_frame_rate(rate);
    }

    let (mut frame_loop, spawner) = lawn_systems::build(config, args.lanes, args.spawn_interval)?;
    info!(lanes = args.lanes, spawn_interval = args.spawn_interval, "lawn demo starting");

    let frames = frame_loop.run();

    let store = frame_loop.store();
    let spawned = store.get::<Counter>(spawner).map_or(0, |c| c.value);
    let mut per_lane: BTreeMap<u8, usize> = BTreeMap::new();
    for (_, lane) in store.iter::<LaneState>() {
        *per_lane.entry(lane.index).or_default() += 1;
    }
    for (lane, walkers) in &per_lane {
        info!(lane, walkers, "lane occupancy");
    }
    info!(
        frames,
        spawned,
        alive = store.count::<LaneState>(),
        entities = store.entity_count(),
        "lawn demo finished"
    );

    Ok(())
}
