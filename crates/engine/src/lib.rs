// crates/engine/src/lib.rs
pub mod checker;
pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod pattern;
pub mod stats;

use reserve_sizer_core::Extractor;
use reserve_sizer_core::counter::counter_lines;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::stats::RunResult;

/// Gather counter text per `config` and size the checker tables.
///
/// # Errors
///
/// Returns an error only when the counter text cannot be obtained or a
/// counter pattern is invalid. Per-table overflow is reported in
/// `RunResult::recommendations.failures`.
pub fn run(config: &Config) -> Result<RunResult> {
    let extractor = config.families.extractor()?;
    let text = input::gather(&config.input)?;
    Ok(analyze(&text, &extractor, config))
}

/// Same as [`run`] for text that is already in memory.
///
/// # Errors
/// Returns an error if a counter pattern is invalid.
pub fn run_text(text: &str, config: &Config) -> Result<RunResult> {
    let extractor = config.families.extractor()?;
    Ok(analyze(text, &extractor, config))
}

fn analyze(text: &str, extractor: &Extractor, config: &Config) -> RunResult {
    let line_count = counter_lines(text).count();
    if line_count == 0 {
        warn!("input contains no counter lines; was the checker run with counters enabled?");
    }

    let snapshot = extractor.extract(text);
    info!(
        files = %snapshot.file_count(),
        classes_and_modules = %snapshot.class_module_count(),
        methods = %snapshot.method_count(),
        counter_lines = line_count,
        "extracted metrics"
    );

    let recommendations = config.recommender().recommend_all(&snapshot);
    for recommendation in &recommendations.recommendations {
        debug!(table = %recommendation.kind, capacity = recommendation.capacity, "recommended capacity");
    }

    RunResult { snapshot, recommendations, counter_lines: line_count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigBuilder, FamilyConfigBuilder};
    use reserve_sizer_core::{Metric, TableKind};
    use std::num::NonZeroU64;

    const SAMPLE: &str = "types.input.files 120\ngarbage line\ntypes.input.classes 300\ntypes.input.modules 50\n";

    #[test]
    fn run_text_with_defaults() {
        let result = run_text(SAMPLE, &Config::default()).unwrap();
        assert_eq!(result.snapshot.file_count(), Metric::Known(120));
        assert_eq!(result.snapshot.class_module_count(), Metric::Known(350));
        assert_eq!(result.snapshot.method_count(), Metric::Unknown);
        assert_eq!(result.counter_lines, 3);
        assert_eq!(result.recommendations.get(TableKind::ClassTable), Some(1024));
        assert_eq!(result.recommendations.get(TableKind::MethodTable), None);
        assert!(!result.has_failures());
    }

    #[test]
    fn custom_floors_and_families() {
        let config = ConfigBuilder::default()
            .class_floor(NonZeroU64::new(4).unwrap())
            .families(
                FamilyConfigBuilder::default()
                    .methods(vec!["suffix:.defs".to_string()])
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let text = "types.input.classes 3\nsorbet.defs 5000\n";
        let result = run_text(text, &config).unwrap();
        assert_eq!(result.recommendations.get(TableKind::ClassTable), Some(8));
        assert_eq!(result.recommendations.get(TableKind::MethodTable), Some(16384));
    }

    #[test]
    fn overflow_is_collected_not_returned() {
        let text = format!("types.input.classes {}\ntypes.input.methods.total 1\n", u64::MAX);
        let result = run_text(&text, &Config::default()).unwrap();
        assert!(result.has_failures());
        assert_eq!(result.recommendations.get(TableKind::MethodTable), Some(4096));
    }
}
