// crates/core/src/family.rs
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::matcher::{CounterMatcher, ExactName};
use crate::metrics::Metric;

pub const FILES_COUNTER: &str = "types.input.files";
pub const CLASSES_COUNTER: &str = "types.input.classes";
pub const MODULES_COUNTER: &str = "types.input.modules";
pub const METHODS_COUNTER: &str = "types.input.methods.total";

/// How the values of several matching lines combine into one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Keep the first matching line, ignore the rest.
    First,
    /// Add every matching line together (saturating).
    Sum,
}

/// A named set of counter-name predicates that together produce one metric.
#[derive(Debug)]
pub struct CounterFamily {
    label: String,
    matchers: Vec<Box<dyn CounterMatcher>>,
    reduction: Reduction,
}

impl CounterFamily {
    #[must_use]
    pub fn new(label: impl Into<String>, reduction: Reduction) -> Self {
        Self { label: label.into(), matchers: Vec::new(), reduction }
    }

    /// Family matching each of `names` exactly.
    #[must_use]
    pub fn exact<I, S>(label: impl Into<String>, reduction: Reduction, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .fold(Self::new(label, reduction), |family, name| {
                family.with_matcher(ExactName(name.as_ref().to_string()))
            })
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: impl CounterMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn push_matcher(&mut self, matcher: Box<dyn CounterMatcher>) {
        self.matchers.push(matcher);
    }

    #[must_use]
    pub fn files() -> Self {
        Self::exact("files", Reduction::First, [FILES_COUNTER])
    }

    #[must_use]
    pub fn class_modules() -> Self {
        Self::exact("classes+modules", Reduction::Sum, [CLASSES_COUNTER, MODULES_COUNTER])
    }

    #[must_use]
    pub fn methods() -> Self {
        Self::exact("methods", Reduction::First, [METHODS_COUNTER])
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn reduction(&self) -> Reduction {
        self.reduction
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// True if any predicate accepts `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(name))
    }

    pub(crate) const fn tally(&self) -> Tally {
        self.tally_with(self.reduction)
    }

    pub(crate) const fn tally_with(&self, reduction: Reduction) -> Tally {
        Tally { reduction, value: None }
    }
}

/// Running result of one family during a scan.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tally {
    reduction: Reduction,
    value: Option<u64>,
}

impl Tally {
    pub(crate) fn observe(&mut self, value: u64) {
        self.value = match (self.reduction, self.value) {
            (_, None) => Some(value),
            (Reduction::First, Some(first)) => Some(first),
            (Reduction::Sum, Some(total)) => Some(total.saturating_add(value)),
        };
    }

    pub(crate) const fn is_settled(&self) -> bool {
        matches!((self.reduction, self.value), (Reduction::First, Some(_)))
    }

    pub(crate) fn finish(self) -> Metric {
        Metric::from(self.value)
    }
}
