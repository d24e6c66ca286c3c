// crates/engine/src/checker.rs
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{EngineError, Result};

/// Runs the type checker and returns its stdout followed by its stderr.
///
/// Counters may land on either stream. A non-zero exit is only logged: type
/// errors make the checker fail while its counters are still valid.
///
/// # Errors
/// Returns [`EngineError::Spawn`] if the process cannot be started.
pub fn run(program: &str, args: &[String]) -> Result<String> {
    debug!(program, ?args, "spawning checker");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| EngineError::Spawn { program: program.to_string(), source })?;

    if !output.status.success() {
        warn!(program, status = %output.status, "checker exited unsuccessfully; scanning its output anyway");
    }

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(text)
}
