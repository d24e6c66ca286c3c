use crate::counter::{CounterLine, counter_lines};
use crate::family::{CounterFamily, Reduction, Tally};
use crate::metrics::{Metric, MetricSnapshot};

/// Turns counter output into a [`MetricSnapshot`].
///
/// Extraction is best-effort: lines that are not `name value` pairs, or whose
/// value does not parse, are skipped. A family with no matching line yields
/// [`Metric::Unknown`].
#[derive(Debug)]
pub struct Extractor {
    files: CounterFamily,
    class_modules: CounterFamily,
    methods: CounterFamily,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(CounterFamily::files(), CounterFamily::class_modules(), CounterFamily::methods())
    }
}

impl Extractor {
    #[must_use]
    pub const fn new(files: CounterFamily, class_modules: CounterFamily, methods: CounterFamily) -> Self {
        Self { files, class_modules, methods }
    }

    #[must_use]
    pub const fn files(&self) -> &CounterFamily {
        &self.files
    }

    #[must_use]
    pub const fn class_modules(&self) -> &CounterFamily {
        &self.class_modules
    }

    #[must_use]
    pub const fn methods(&self) -> &CounterFamily {
        &self.methods
    }

    /// Scans `text` once and reduces every family.
    #[must_use]
    pub fn extract(&self, text: &str) -> MetricSnapshot {
        self.extract_lines(counter_lines(text))
    }

    #[must_use]
    pub fn extract_lines<'a, I>(&self, lines: I) -> MetricSnapshot
    where
        I: IntoIterator<Item = CounterLine<'a>>,
    {
        let families = [&self.files, &self.class_modules, &self.methods];
        let mut tallies = families.map(CounterFamily::tally);

        for line in lines {
            for (family, tally) in families.iter().zip(tallies.iter_mut()) {
                if !tally.is_settled() && family.matches(line.name) {
                    tally.observe(line.value);
                }
            }
        }

        let [files, class_modules, methods] = tallies.map(|t| t.finish());
        MetricSnapshot::new(files, class_modules, methods)
    }
}

/// First value of the default files counter in `text`.
#[must_use]
pub fn extract_file_count(text: &str) -> Metric {
    extract_family(text, &CounterFamily::files())
}

/// Saturating sum of every line matching `family` in `text`, whatever
/// reduction the family itself carries. `Unknown` when none match.
#[must_use]
pub fn extract_aggregate_count(text: &str, family: &CounterFamily) -> Metric {
    reduce(text, family, family.tally_with(Reduction::Sum))
}

/// First value of the default methods counter in `text`.
#[must_use]
pub fn extract_method_count(text: &str) -> Metric {
    extract_family(text, &CounterFamily::methods())
}

fn extract_family(text: &str, family: &CounterFamily) -> Metric {
    reduce(text, family, family.tally())
}

fn reduce(text: &str, family: &CounterFamily, mut tally: Tally) -> Metric {
    for line in counter_lines(text).filter(|line| family.matches(line.name)) {
        tally.observe(line.value);
        if tally.is_settled() {
            break;
        }
    }
    tally.finish()
}
