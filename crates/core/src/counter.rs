// crates/core/src/counter.rs

/// A single `name value` counter line, borrowed from the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLine<'a> {
    pub name: &'a str,
    pub value: u64,
}

impl<'a> CounterLine<'a> {
    /// Parses one line of counter output.
    ///
    /// The first whitespace-separated field is the counter name and the last
    /// one is its value. Returns `None` for lines with fewer than two fields
    /// or whose trailing field is not an unsigned decimal that fits in `u64`.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split_ascii_whitespace();
        let name = fields.next()?;
        let last = fields.last()?;
        let value = parse_value(last)?;
        Some(Self { name, value })
    }
}

fn parse_value(field: &str) -> Option<u64> {
    // `u64::from_str` accepts a leading '+', counters never carry one.
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Iterates the well-formed counter lines of `text`, skipping everything else.
pub fn counter_lines(text: &str) -> impl Iterator<Item = CounterLine<'_>> {
    text.lines().filter_map(CounterLine::parse)
}
