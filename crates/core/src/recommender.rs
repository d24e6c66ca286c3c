use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU64;

use serde::Serialize;

use crate::capacity::recommend;
use crate::error::CapacityError;
use crate::metrics::{Metric, MetricSnapshot};

// Evaluated at compile time.
const CLASS_TABLE_FLOOR: NonZeroU64 = NonZeroU64::new(1024).unwrap();
const METHOD_TABLE_FLOOR: NonZeroU64 = NonZeroU64::new(4096).unwrap();

/// Checker tables that can be reserved before bulk insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    ClassTable,
    MethodTable,
}

impl TableKind {
    /// Rendering order of recommendations.
    pub const ALL: [Self; 2] = [Self::ClassTable, Self::MethodTable];

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::ClassTable => "class-table",
            Self::MethodTable => "method-table",
        }
    }

    /// Checker flag that takes this table's capacity.
    #[must_use]
    pub const fn flag_name(self) -> &'static str {
        match self {
            Self::ClassTable => "--reserve-class-table-capacity",
            Self::MethodTable => "--reserve-method-table-capacity",
        }
    }

    /// The checker's own default size; recommendations never go below it.
    #[must_use]
    pub const fn default_floor(self) -> NonZeroU64 {
        match self {
            Self::ClassTable => CLASS_TABLE_FLOOR,
            Self::MethodTable => METHOD_TABLE_FLOOR,
        }
    }

    /// The snapshot metric that sizes this table.
    #[must_use]
    pub const fn metric(self, snapshot: &MetricSnapshot) -> Metric {
        match self {
            Self::ClassTable => snapshot.class_module_count(),
            Self::MethodTable => snapshot.method_count(),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Capacity for one table; renders as `<flag-name>=<capacity>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "table")]
    pub kind: TableKind,
    pub capacity: u64,
}

impl Recommendation {
    #[must_use]
    pub const fn flag_name(&self) -> &'static str {
        self.kind.flag_name()
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind.flag_name(), self.capacity)
    }
}

/// Outcome of sizing every table kind for one snapshot.
///
/// Kinds whose metric is unknown appear in neither list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub failures: Vec<(TableKind, CapacityError)>,
}

impl RecommendationSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty() && self.failures.is_empty()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    #[must_use]
    pub fn get(&self, kind: TableKind) -> Option<u64> {
        self.recommendations.iter().find(|r| r.kind == kind).map(|r| r.capacity)
    }

    /// `(identifier, capacity)` pairs in rendering order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.recommendations.iter().map(|r| (r.kind.identifier(), r.capacity))
    }

    /// One `<flag-name>=<capacity>` string per recommendation.
    pub fn flag_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.recommendations.iter().map(ToString::to_string)
    }
}

/// Applies per-table floors to a [`MetricSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommender {
    class_floor: NonZeroU64,
    method_floor: NonZeroU64,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(TableKind::ClassTable.default_floor(), TableKind::MethodTable.default_floor())
    }
}

impl Recommender {
    #[must_use]
    pub const fn new(class_floor: NonZeroU64, method_floor: NonZeroU64) -> Self {
        Self { class_floor, method_floor }
    }

    #[must_use]
    pub const fn floor(&self, kind: TableKind) -> NonZeroU64 {
        match kind {
            TableKind::ClassTable => self.class_floor,
            TableKind::MethodTable => self.method_floor,
        }
    }

    /// Sizes a single table, or `None` when its metric is unknown.
    ///
    /// # Errors
    ///
    /// Propagates [`CapacityError::Overflow`] from [`recommend`].
    pub fn recommend_for(
        &self,
        kind: TableKind,
        metric: Metric,
    ) -> Option<Result<Recommendation, CapacityError>> {
        let count = metric.value()?;
        Some(recommend(count, self.floor(kind)).map(|capacity| Recommendation { kind, capacity }))
    }

    /// Sizes every table kind in [`TableKind::ALL`] order.
    #[must_use]
    pub fn recommend_all(&self, snapshot: &MetricSnapshot) -> RecommendationSet {
        let mut set = RecommendationSet::default();
        for kind in TableKind::ALL {
            match self.recommend_for(kind, kind.metric(snapshot)) {
                Some(Ok(recommendation)) => set.recommendations.push(recommendation),
                Some(Err(err)) => set.failures.push((kind, err)),
                None => {}
            }
        }
        set
    }
}
