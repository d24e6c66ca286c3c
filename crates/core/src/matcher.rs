use alloc::string::String;
use core::fmt;

/// Decides whether a counter name belongs to a family.
///
/// Implementations must be cheap: the extractor calls them once per counter
/// line for every family.
pub trait CounterMatcher: fmt::Debug + Send + Sync {
    fn matches(&self, name: &str) -> bool;
}

/// Matches one counter name exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactName(pub String);

impl CounterMatcher for ExactName {
    fn matches(&self, name: &str) -> bool {
        self.0 == name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePrefix(pub String);

impl CounterMatcher for NamePrefix {
    fn matches(&self, name: &str) -> bool {
        name.starts_with(self.0.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSuffix(pub String);

impl CounterMatcher for NameSuffix {
    fn matches(&self, name: &str) -> bool {
        name.ends_with(self.0.as_str())
    }
}
