// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::{AppError, Result};
use tracing::error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the engine, renders the result and writes it out.
///
/// Output is written even when some table failed to size; the failure is
/// then reported through [`AppError::RecommendationFailed`].
///
/// # Errors
/// Returns an error if input cannot be gathered, output cannot be written, or
/// any recommendation overflowed.
pub fn execute(config: &Config) -> Result<()> {
    let result = reserve_sizer_engine::run(config)?;
    let rendered = presentation::render(&result, config.format)?;

    match &config.output_path {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    let failures = &result.recommendations.failures;
    for (kind, err) in failures {
        error!(table = %kind, "{err}");
    }
    if failures.is_empty() {
        Ok(())
    } else {
        Err(AppError::RecommendationFailed { count: failures.len() })
    }
}
