//! Range Expressions
//!
//! Compact selector syntax for problem and version numbers:
//!
//! ```text
//! "1"          -> [1]
//! "1..3"       -> [1, 2, 3]
//! "1..3,5"     -> [1, 2, 3, 5]
//! "1..3,5..7"  -> [1, 2, 3, 5, 6, 7]
//! "4..6,1..3"  -> [1, 2, 3, 4, 5, 6]
//! ```
//!
//! Segments are comma separated and may be padded with whitespace. The result
//! is the sorted, deduplicated union of all segments. A segment `N..M` with
//! `N > M` contributes nothing. An expression may select at most
//! [`MAX_RANGE_VALUES`] numbers; wider selectors fail with
//! `RangeError::TooLarge` before they are expanded.

use crate::error::RangeError;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Most numbers one range expression may select
///
/// Covers every id of a 6-digit naming width.
pub const MAX_RANGE_VALUES: usize = 1_000_000;

static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)(\.\.([0-9]+))?\s*$").expect("segment pattern is valid")
});

/// Expand a range expression into a sorted list of distinct numbers
///
/// # Examples
///
/// ```
/// use eulerbench_core::parse_range;
///
/// assert_eq!(parse_range("1..3,5").unwrap(), vec![1, 2, 3, 5]);
/// assert!(parse_range("1..").is_err());
/// ```
pub fn parse_range(expression: &str) -> Result<Vec<u32>, RangeError> {
    let mut values = BTreeSet::new();

    for segment in expression.split(',') {
        let (start, end) = parse_segment(segment)?;
        if start > end {
            continue;
        }
        let too_large = || RangeError::TooLarge {
            segment: segment.trim().to_string(),
            limit: MAX_RANGE_VALUES,
        };
        if (end - start) as usize >= MAX_RANGE_VALUES {
            return Err(too_large());
        }
        values.extend(start..=end);
        if values.len() > MAX_RANGE_VALUES {
            return Err(too_large());
        }
    }

    Ok(values.into_iter().collect())
}

fn parse_segment(segment: &str) -> Result<(u32, u32), RangeError> {
    let captures = SEGMENT
        .captures(segment)
        .ok_or_else(|| RangeError::Malformed {
            segment: segment.to_string(),
        })?;

    let start = parse_bound(&captures[1])?;
    let end = match captures.get(3) {
        Some(m) => parse_bound(m.as_str())?,
        None => start,
    };

    Ok((start, end))
}

fn parse_bound(digits: &str) -> Result<u32, RangeError> {
    digits.parse().map_err(|_| RangeError::Overflow {
        value: digits.to_string(),
    })
}
