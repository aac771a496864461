//! genius - Simon-style memory game in the terminal
//!
//! Run with: cargo run            (add `-- --mute` to skip audio)
//! Logs go to genius.log; set RUST_LOG=debug for cue-level detail.

mod app;
mod ui;

use std::fs::File;

use app::Genius;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use genius::EngineConfig;

const LOG_PATH: &str = "genius.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let muted = std::env::args().skip(1).any(|arg| arg == "--mute");

    Genius::new()
        .config(EngineConfig::default())
        .muted(muted)
        .run()
}

/// The terminal owns stdout, so logs go to a file
fn init_logging() -> EyreResult<()> {
    let file = File::create(LOG_PATH).wrap_err_with(|| format!("failed to create {}", LOG_PATH))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
