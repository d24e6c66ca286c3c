use std::fmt::Display;
use std::num::NonZeroU64;
use std::str::FromStr;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .replace('_', "")
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a table floor: a positive `u64`, underscores allowed (`4_096`).
///
/// # Errors
/// Returns an error if the input is not a number or is zero.
pub fn parse_floor(s: &str) -> Result<NonZeroU64, String> {
    let value = parse_bounded_number(s, 1u64, Some(1u64 << 63))?;
    NonZeroU64::new(value).ok_or_else(|| "value must be at least 1".to_string())
}

/// Validate a counter pattern (`re:`, `prefix:`, `suffix:` or exact name).
///
/// # Errors
/// Returns the pattern error message if it does not compile.
pub fn parse_counter_pattern(s: &str) -> Result<String, String> {
    reserve_sizer_engine::pattern::parse_pattern(s)
        .map(|_| s.to_string())
        .map_err(|err| err.to_string())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Plain positive values parse unchanged
        #[test]
        fn test_floor_roundtrip(n in 1u64..=(1u64 << 63)) {
            let parsed = parse_floor(&n.to_string()).unwrap();
            prop_assert_eq!(parsed.get(), n);
        }

        /// Exact counter names are passed through verbatim
        #[test]
        fn test_exact_pattern_passthrough(name in "[a-z][a-z0-9_]{0,10}(\\.[a-z0-9_]{1,10}){0,4}") {
            prop_assert_eq!(parse_counter_pattern(&name).unwrap(), name);
        }
    }
}
