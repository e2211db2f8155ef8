//! Widget Tour - a terminal catalog of interactive widget demonstrations.
//!
//! A master list of widget categories opens per-category detail screens with
//! live, keyboard-driven demos.

mod config;
mod core;
mod frontend;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::core::AppCore;
use crate::frontend::{Frontend, TuiFrontend};

#[derive(Parser)]
#[command(name = "widget-tour")]
#[command(about = "Terminal catalog of interactive widget demonstrations", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.widget-tour)
    /// Can also be set via WIDGET_TOUR_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Override the progress tick interval in milliseconds
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the widget categories and exit
    Categories,
}

fn main() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file.
    // Use RUST_LOG to control the level, e.g. RUST_LOG=debug.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("widget-tour.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Some(dir) = &cli.data_dir {
        std::env::set_var("WIDGET_TOUR_DIR", dir);
    }

    if let Some(Commands::Categories) = cli.command {
        let catalog = core::Catalog::new();
        for (i, entry) in catalog.entries().iter().enumerate() {
            println!("{:2}  {}", i, entry.display_name);
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load()?,
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.ui.tick_interval_ms = tick_ms;
    }

    tracing::info!("starting widget-tour");
    run_tui(config)
}

fn run_tui(config: config::Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_tui(config))
}

async fn async_run_tui(config: config::Config) -> Result<()> {
    let poll_timeout = Duration::from_millis(config.ui.frame_poll_ms);
    let mut frontend = TuiFrontend::new(poll_timeout).context("Failed to initialize terminal")?;
    let mut app = AppCore::new(config);

    while app.running {
        for event in frontend.poll_events()? {
            app.handle_event(event);
        }
        app.update(Instant::now());
        frontend.render(&app)?;
    }

    frontend.cleanup()?;
    tracing::info!("exiting widget-tour");
    Ok(())
}
