//! Hero behavior sandbox.
//!
//! Replays an input script against a hero standing in a sandbox room and logs
//! every state transition.
//!
//! # Examples
//!
//! ```bash
//! # Explicit paths
//! cargo run -p hero-cli -- --room crates/hero/cli/data/room.ron \
//!     --script crates/hero/cli/data/push_block.ron
//!
//! # Paths from the environment (or a .env file), with every state change
//! HERO_ROOM=... HERO_SCRIPT=... RUST_LOG=hero_core=debug cargo run -p hero-cli
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hero_content::{ConfigLoader, DEFAULT_TICK, RoomLoader, Sandbox, ScriptLoader, Simulation};
use hero_core::HeroConfig;

/// Replay an input script against the hero state machine
#[derive(Parser)]
#[command(name = "hero-sim")]
#[command(about = "Replay an input script against the hero state machine", long_about = None)]
#[command(version)]
struct Cli {
    /// Hero tuning file (TOML); defaults are used when omitted
    #[arg(short, long, env = "HERO_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sandbox room file (RON)
    #[arg(short, long, env = "HERO_ROOM", value_name = "FILE")]
    room: PathBuf,

    /// Input script file (RON)
    #[arg(short, long, env = "HERO_SCRIPT", value_name = "FILE")]
    script: PathBuf,

    /// Simulation step in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TICK)]
    tick: u64,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load hero config: {}", path.display()))?,
        None => HeroConfig::default(),
    };
    let room = RoomLoader::load(&cli.room)
        .with_context(|| format!("Failed to load room: {}", cli.room.display()))?;
    let script = ScriptLoader::load(&cli.script)
        .with_context(|| format!("Failed to load script: {}", cli.script.display()))?;

    tracing::info!(
        room = %cli.room.display(),
        script = %cli.script.display(),
        entities = room.entities.len(),
        events = script.events().len(),
        duration = %script.duration(),
        tick = cli.tick,
        "Starting simulation"
    );

    let summary = Simulation::new(Sandbox::new(room), config, script)
        .with_tick(cli.tick)
        .run();

    tracing::info!(
        ended_at = %summary.ended_at,
        state = summary.final_state,
        position = %summary.final_position,
        life = summary.life,
        transitions = summary.transitions.len(),
        "Simulation finished"
    );

    for transition in &summary.transitions {
        println!(
            "{:>8}  {} -> {}",
            transition.at.to_string(),
            transition.from,
            transition.to
        );
    }
    println!(
        "final: {} at {} (life {})",
        summary.final_state, summary.final_position, summary.life
    );

    Ok(())
}
