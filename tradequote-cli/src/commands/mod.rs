//! CLI command implementations

pub mod auth;
pub mod describe;
pub mod export;
pub mod margin;
pub mod new;
pub mod row;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tradequote_core::services::{LogEvent, LoggingService};
use tradequote_core::QuoteContext;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let dir = get_tradequote_dir();
    std::fs::create_dir_all(&dir).ok()?;
    LoggingService::new(&dir, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the tradequote directory from environment or default
pub fn get_tradequote_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TRADEQUOTE_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".tradequote")
    }
}

/// Get or create the quote context
pub fn get_context() -> Result<QuoteContext> {
    let dir = get_tradequote_dir();

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create tradequote directory: {:?}", dir))?;

    QuoteContext::new(&dir).context("Failed to initialize tradequote context")
}
