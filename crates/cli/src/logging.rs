use tracing_subscriber::EnvFilter;

/// Level directive for the given `-v` count / `-q` flag.
///
/// Returns `None` when neither was given so `RUST_LOG` can decide.
#[must_use]
pub fn level_directive(verbose: u8, quiet: bool) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("info"),
        (false, 2) => Some("debug"),
        (false, _) => Some("trace"),
    }
}

/// Installs the stderr subscriber. Stdout stays reserved for the rendered output.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = match level_directive(verbose, quiet) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_directive(0, false), None);
        assert_eq!(level_directive(1, false), Some("info"));
        assert_eq!(level_directive(2, false), Some("debug"));
        assert_eq!(level_directive(7, false), Some("trace"));
        assert_eq!(level_directive(0, true), Some("error"));
    }
}
