//! Replays a recorded scene and reports where each target lands on screen.
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use sightline::{init_logging, Monitor, Scene, SettingsOverrides};

/// Projects recorded entities onto the viewpoint's screen
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene file (JSON) to replay
    scene: PathBuf,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Replay the scene this many times
    #[arg(long)]
    loops: Option<u32>,

    /// World units added to each target's x and y before projecting
    #[arg(long)]
    anchor_offset: Option<f32>,

    /// Marker half-extent in pixels at one world unit of depth
    #[arg(long)]
    marker_scale: Option<f32>,

    /// Only project targets whose vitality exceeds this value
    #[arg(long)]
    vitality_floor: Option<i32>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Settings flags given on the command line.
    const fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            vitality_floor: self.vitality_floor,
            anchor_offset: self.anchor_offset,
            marker_scale: self.marker_scale,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut scene = Scene::load(&args.scene)
        .with_context(|| format!("loading scene {}", args.scene.display()))?;
    if let Some(loops) = args.loops {
        scene = scene.with_loops(loops);
    }
    let settings = scene
        .settings()
        .unwrap_or_default()
        .overridden_by(args.overrides());
    info!("monitor settings: {settings:?}");

    let mut out = BufWriter::new(io::stdout().lock());
    let mut write_error = None;
    let mut monitor = Monitor::new(scene.into_source(), settings);
    monitor
        .run(args.ticks, |report| {
            if write_error.is_some() {
                return;
            }
            let written = serde_json::to_writer(&mut out, report)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(out));
            if let Err(e) = written {
                write_error = Some(e);
            }
        })
        .context("running monitor")?;
    if let Some(e) = write_error {
        return Err(e).context("writing reports");
    }
    out.flush().context("flushing reports")?;
    Ok(())
}
