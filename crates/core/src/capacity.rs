use core::num::NonZeroU64;

use crate::error::CapacityError;

/// Smallest power of two that is at least `max(count * 2, floor)`.
///
/// Integer-only: a target that already is a power of two is returned as is.
///
/// # Errors
///
/// Returns [`CapacityError::Overflow`] when `count * 2` or the rounded-up
/// power of two does not fit in a `u64`.
pub fn recommend(count: u64, floor: NonZeroU64) -> Result<u64, CapacityError> {
    let overflow = || CapacityError::Overflow { count, floor: floor.get() };
    let target = count.checked_mul(2).ok_or_else(overflow)?.max(floor.get());
    target.checked_next_power_of_two().ok_or_else(overflow)
}
