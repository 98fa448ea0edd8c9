//! Terminal blackjack.
//!
//! Configuration comes from the environment:
//!
//! - `BJTUI_SEED`: shuffle seed (defaults to the current time)
//! - `BJTUI_BALANCE`: starting balance
//! - `BJTUI_SHUFFLE`: `sitting` (default) or `round`
//! - `BJTUI_INTRO`: `off` skips the pre-round sequence
//! - `RUST_LOG`: log filter for the log file

use core::str::FromStr;
use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use bjtui::{Session, SessionOptions, ShufflePolicy};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, stay silent rather than writing over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => warnings.push(format!(
                "Failed to open log file {}: {e}",
                candidate.display()
            )),
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(data_dir) = dirs::data_local_dir() {
        candidates.push(data_dir.join("bjtui").join("logs").join("bjtui.log"));
    }
    candidates.push(PathBuf::from(".bjtui").join("logs").join("bjtui.log"));

    candidates
}

fn env_value<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(name, value = %raw, "Ignoring unparsable setting");
    }
    parsed
}

fn options_from_env() -> SessionOptions {
    let mut options = SessionOptions::default();

    if let Some(balance) = env_value::<u64>("BJTUI_BALANCE") {
        options = options.with_starting_balance(balance);
    }

    if let Ok(value) = env::var("BJTUI_SHUFFLE") {
        match value.trim().to_ascii_lowercase().as_str() {
            "sitting" => options = options.with_shuffle(ShufflePolicy::PerSitting),
            "round" => options = options.with_shuffle(ShufflePolicy::EveryRound),
            other => tracing::warn!("Unknown shuffle policy: {other}"),
        }
    }

    if let Ok(value) = env::var("BJTUI_INTRO") {
        let enabled = !matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "off" | "0" | "false"
        );
        options = options.with_pre_round_animation(enabled);
    }

    options
}

fn main() -> Result<()> {
    init_tracing();

    let seed = env_value::<u64>("BJTUI_SEED").unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = options_from_env();
    let mut session = Session::new(options, seed);

    bjtui::tui::run(&mut session, seed)?;

    tracing::info!(balance = session.balance(), "Goodbye");
    Ok(())
}
