use thiserror::Error;

/// Failure of a single capacity computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// Doubling the count, or rounding it up to a power of two, leaves the `u64` range.
    #[error("count {count} is too large to size a table (floor {floor})")]
    Overflow { count: u64, floor: u64 },
}
