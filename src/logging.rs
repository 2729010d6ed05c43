use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for the log file. Logging is off when unset.
pub(crate) const LOG_ENV: &str = "BUDGET_DASH_LOG";

/// Installs a file-backed subscriber when [`LOG_ENV`] is set. The terminal is
/// owned by the UI, so nothing is ever written to stdout or stderr.
pub(crate) fn init() -> Result<()> {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid {LOG_ENV} filter: {directive}"))?;

    let path = log_path()?;
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(path = %path.display(), "logging enabled");
    Ok(())
}

fn log_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budget-dash", "BudgetDash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("budget-dash.log"))
}
