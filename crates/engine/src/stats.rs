use reserve_sizer_core::{MetricSnapshot, RecommendationSet};

/// Everything one run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub snapshot: MetricSnapshot,
    pub recommendations: RecommendationSet,
    /// Number of lines that parsed as `name value` counters, matched or not.
    pub counter_lines: usize,
}

impl RunResult {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.recommendations.has_failures()
    }
}
