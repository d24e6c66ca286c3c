use core::fmt;

use serde::{Serialize, Serializer};

/// A count read from counter output, or the absence of one.
///
/// `Known(0)` and `Unknown` are different answers: the first means the
/// checker reported zero, the second that no usable counter line was seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    #[default]
    Unknown,
    Known(u64),
}

impl Metric {
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<u64> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Option<u64>> for Metric {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => write!(f, "{value}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(value) => serializer.serialize_u64(*value),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}

/// Symbol-table cardinalities extracted from one checker run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricSnapshot {
    file_count: Metric,
    class_module_count: Metric,
    method_count: Metric,
}

impl MetricSnapshot {
    #[must_use]
    pub const fn new(file_count: Metric, class_module_count: Metric, method_count: Metric) -> Self {
        Self { file_count, class_module_count, method_count }
    }

    #[inline]
    #[must_use]
    pub const fn file_count(&self) -> Metric {
        self.file_count
    }

    /// Classes and modules summed together.
    #[inline]
    #[must_use]
    pub const fn class_module_count(&self) -> Metric {
        self.class_module_count
    }

    #[inline]
    #[must_use]
    pub const fn method_count(&self) -> Metric {
        self.method_count
    }

    /// True when no metric could be extracted at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.file_count.is_known() && !self.class_module_count.is_known() && !self.method_count.is_known()
    }
}
