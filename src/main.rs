//! Cup Match runner (default binary).
//!
//! Plays in the terminal with crossterm input and the framebuffer renderer, or
//! with `--headless` as a JSON line presenter on stdin/stdout.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cup_match::config::AppConfig;
use cup_match::{app, headless};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().apply_args(&args)?;

    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(time_seed);
    tracing::info!(seed, items = config.items, headless = config.headless, "starting");

    if config.headless {
        headless::run_stdio(&config, seed)
    } else {
        app::run(&config, seed)
    }
}

/// The terminal UI owns stdout, so logs go to a file. Headless mode may also
/// log to stderr.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = config.log_path.as_deref() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter)
            .init();
    } else if config.headless {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
    Ok(())
}

fn time_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (nanos >> 32)) as u32
}
