// crates/engine/src/pattern.rs
//! Counter name patterns accepted on the command line.
//!
//! | syntax          | matcher                        |
//! |-----------------|--------------------------------|
//! | `re:<regex>`    | regex over the whole name      |
//! | `prefix:<text>` | [`NamePrefix`]                 |
//! | `suffix:<text>` | [`NameSuffix`]                 |
//! | anything else   | [`ExactName`]                  |

use regex::Regex;
use reserve_sizer_core::{CounterFamily, CounterMatcher, ExactName, NamePrefix, NameSuffix, Reduction};

use crate::error::{EngineError, Result};

/// Matches counter names against a regex anchored at both ends.
#[derive(Debug, Clone)]
pub struct RegexMatcher(Regex);

impl RegexMatcher {
    /// # Errors
    /// Returns [`EngineError::Regex`] if `pattern` does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self(Regex::new(&format!("^(?:{pattern})$"))?))
    }
}

impl CounterMatcher for RegexMatcher {
    fn matches(&self, name: &str) -> bool {
        self.0.is_match(name)
    }
}

/// Compiles one pattern string into a matcher.
///
/// # Errors
/// Returns an error for empty patterns and regexes that fail to compile.
pub fn parse_pattern(spec: &str) -> Result<Box<dyn CounterMatcher>> {
    let invalid = |reason: &str| EngineError::InvalidPattern {
        pattern: spec.to_string(),
        reason: reason.to_string(),
    };

    let (kind, body) = match spec.split_once(':') {
        Some((kind @ ("re" | "prefix" | "suffix"), body)) => (kind, body),
        _ => ("exact", spec),
    };
    if body.trim().is_empty() {
        return Err(invalid("pattern is empty"));
    }

    let matcher: Box<dyn CounterMatcher> = match kind {
        "re" => Box::new(RegexMatcher::new(body)?),
        "prefix" => Box::new(NamePrefix(body.to_string())),
        "suffix" => Box::new(NameSuffix(body.to_string())),
        _ => Box::new(ExactName(body.to_string())),
    };
    Ok(matcher)
}

/// Builds a family from pattern strings.
///
/// # Errors
/// Propagates the first pattern that fails to parse.
pub fn build_family<S: AsRef<str>>(label: &str, reduction: Reduction, patterns: &[S]) -> Result<CounterFamily> {
    let mut family = CounterFamily::new(label, reduction);
    for spec in patterns {
        family.push_matcher(parse_pattern(spec.as_ref())?);
    }
    Ok(family)
}
