use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::checker;
use crate::error::{EngineError, Result};
use crate::options::InputSource;

/// Collects the counter text described by `source`.
///
/// Invalid UTF-8 is replaced rather than rejected; the extractor only cares
/// about the ASCII counter lines.
///
/// # Errors
/// Returns an error if a file or stdin cannot be read, or the checker cannot be spawned.
pub fn gather(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => read_stdin(),
        InputSource::Files(paths) if paths.is_empty() => read_stdin(),
        InputSource::Files(paths) => {
            let mut text = String::new();
            for path in paths {
                let chunk = if path.as_os_str() == "-" { read_stdin()? } else { read_file(path)? };
                text.push_str(&chunk);
                if !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Ok(text)
        }
        InputSource::Command { program, args } => checker::run(program, args),
    }
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| EngineError::FileRead { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read counter file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin().lock().read_to_end(&mut bytes).map_err(EngineError::Stdin)?;
    debug!(bytes = bytes.len(), "read counters from stdin");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
