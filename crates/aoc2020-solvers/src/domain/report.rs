//! Expense report search (Day 1)
//!
//! The report is a set of distinct integers. The solvers look for two or three
//! entries adding up to [`TARGET_SUM`] and return their product.
//!
//! Iteration follows the set's own order, so when several qualifying pairs
//! exist the one returned is whichever is met first.

use crate::constants::{NOT_FOUND, TARGET_SUM};
use crate::domain::input_format::InputError;
use tracing::{info, warn};

/// Set of report entries
#[cfg(feature = "fxhash")]
pub type ReportSet = rustc_hash::FxHashSet<i64>;

/// Set of report entries
#[cfg(not(feature = "fxhash"))]
pub type ReportSet = std::collections::HashSet<i64>;

/// Parse report text, one base-10 integer per line
///
/// Blank lines are skipped. Duplicate values collapse into one entry.
pub fn parse_report(text: &str) -> Result<ReportSet, InputError> {
    let mut values = ReportSet::default();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = line.parse::<i64>().map_err(|_| InputError::InvalidNumber {
            line: index + 1,
            value: line.to_string(),
        })?;
        values.insert(value);
    }

    Ok(values)
}

/// Find two entries summing to `target`
///
/// An entry pairs with itself when it is exactly half of `target`.
/// Entries whose complement overflows `i64` are skipped.
pub fn find_pair(values: &ReportSet, target: i64) -> Option<(i64, i64)> {
    values.iter().find_map(|&value| {
        let complement = target.checked_sub(value)?;
        values.contains(&complement).then_some((value, complement))
    })
}

/// Find three entries summing to `target`
///
/// The first two entries are distinct. The third must be strictly positive
/// and may coincide with either of the first two. Pairs whose remainder
/// overflows `i64` are skipped.
pub fn find_triple(values: &ReportSet, target: i64) -> Option<(i64, i64, i64)> {
    for &first in values {
        for &second in values {
            if first == second {
                continue;
            }
            let Some(remainder) = target
                .checked_sub(first)
                .and_then(|r| r.checked_sub(second))
            else {
                continue;
            };
            if remainder > 0 && values.contains(&remainder) {
                return Some((first, second, remainder));
            }
        }
    }
    None
}

/// Product of the pair summing to 2020, or `-1`
///
/// A product that overflows `i64` also yields `-1`.
pub fn solve1(values: &ReportSet) -> i64 {
    let Some((a, b)) = find_pair(values, TARGET_SUM) else {
        return NOT_FOUND;
    };
    info!(a, b, "solved pair");
    a.checked_mul(b).unwrap_or_else(|| {
        warn!(a, b, "product overflows i64");
        NOT_FOUND
    })
}

/// Product of the triple summing to 2020, or `-1`
///
/// A product that overflows `i64` also yields `-1`.
pub fn solve2(values: &ReportSet) -> i64 {
    let Some((a, b, c)) = find_triple(values, TARGET_SUM) else {
        return NOT_FOUND;
    };
    info!(a, b, c, "solved triple");
    a.checked_mul(b)
        .and_then(|ab| ab.checked_mul(c))
        .unwrap_or_else(|| {
            warn!(a, b, c, "product overflows i64");
            NOT_FOUND
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportSet {
        [1721, 979, 366, 299, 675, 1456].into_iter().collect()
    }

    #[test]
    fn test_solve1_sample() {
        assert_eq!(solve1(&sample()), 514579);
    }

    #[test]
    fn test_solve2_sample() {
        assert_eq!(solve2(&sample()), 241861950);
    }

    #[test]
    fn test_find_pair_members() {
        let (a, b) = find_pair(&sample(), TARGET_SUM).unwrap();
        assert_eq!(a + b, TARGET_SUM);
        assert!([a, b].contains(&1721));
        assert!([a, b].contains(&299));
    }

    #[test]
    fn test_no_solution_returns_not_found() {
        let values: ReportSet = [1, 2, 3].into_iter().collect();
        assert_eq!(solve1(&values), NOT_FOUND);
        assert_eq!(solve2(&values), NOT_FOUND);
    }

    #[test]
    fn test_empty_set() {
        let values = ReportSet::default();
        assert_eq!(solve1(&values), NOT_FOUND);
        assert_eq!(solve2(&values), NOT_FOUND);
    }

    #[test]
    fn test_pair_with_itself_at_half_target() {
        let values: ReportSet = [1010, 5].into_iter().collect();
        assert_eq!(find_pair(&values, TARGET_SUM), Some((1010, 1010)));
        assert_eq!(solve1(&values), 1010 * 1010);
    }

    #[test]
    fn test_triple_third_may_repeat() {
        // 1000 + 20 + 1000: the third entry reuses the first
        let values: ReportSet = [1000, 20].into_iter().collect();
        assert_eq!(solve2(&values), 1000 * 20 * 1000);
    }

    #[test]
    fn test_triple_zero_remainder_not_matched() {
        // 2020 + 0 + 0 would sum to 2020, but the third entry must be positive
        let values: ReportSet = [2020, 0, 5].into_iter().collect();
        assert_eq!(solve2(&values), NOT_FOUND);
    }

    #[test]
    fn test_pair_product_overflow_returns_not_found() {
        let values: ReportSet = [4_000_000_000, -3_999_997_980].into_iter().collect();
        assert!(find_pair(&values, TARGET_SUM).is_some());
        assert_eq!(solve1(&values), NOT_FOUND);
    }

    #[test]
    fn test_pair_complement_overflow_is_skipped() {
        let values: ReportSet = [i64::MIN].into_iter().collect();
        assert_eq!(find_pair(&values, TARGET_SUM), None);
        assert_eq!(solve1(&values), NOT_FOUND);
    }

    #[test]
    fn test_triple_product_overflow_returns_not_found() {
        let values: ReportSet = [3_000_000_000, -2_999_998_000, 20].into_iter().collect();
        assert!(find_triple(&values, TARGET_SUM).is_some());
        assert_eq!(solve2(&values), NOT_FOUND);
    }

    #[test]
    fn test_triple_remainder_overflow_is_skipped() {
        let values: ReportSet = [i64::MIN, i64::MAX, 1].into_iter().collect();
        assert_eq!(solve2(&values), NOT_FOUND);
    }

    #[test]
    fn test_parse_report_collapses_duplicates() {
        let values = parse_report("5\n5\n").unwrap();
        assert_eq!(values.len(), 1);
        assert!(values.contains(&5));
    }

    #[test]
    fn test_parse_report_skips_blank_lines() {
        let values = parse_report("1721\r\n\n299\n").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(solve1(&values), 514579);
    }

    #[test]
    fn test_parse_report_rejects_malformed_line() {
        let result = parse_report("1721\nabc\n");
        assert!(matches!(
            result,
            Err(InputError::InvalidNumber { line: 2, ref value }) if value == "abc"
        ));
    }
}
