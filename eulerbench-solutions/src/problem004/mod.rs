#[allow(clippy::module_inception)]
mod problem004;

pub use problem004::Problem004;

pub mod version001;
pub mod version002;
pub mod version003;

use crate::utils::PalindromeAlgorithm;
use eulerbench_core::{ProblemArgs, SolveError};

/// Widest factor whose products still fit in a `u64`
const MAX_DIGITS: u32 = 9;

/// `[min, max)` of the factors with `--digits` decimal digits
fn factor_bounds(args: &ProblemArgs) -> Result<(u64, u64), SolveError> {
    let digits: u32 = args.get("digits")?;
    if !(1..=MAX_DIGITS).contains(&digits) {
        return Err(SolveError::InvalidArgument {
            name: "digits".into(),
            reason: format!("must be between 1 and {MAX_DIGITS}, got {digits}"),
        });
    }
    Ok((10u64.pow(digits - 1), 10u64.pow(digits)))
}

/// Largest palindromic product over all factor pairs `low <= high`, scanning
/// `low` upwards; the first pair found wins on equal products
fn bottom_up((min, max): (u64, u64), palindrome: PalindromeAlgorithm) -> Option<(u64, u64)> {
    let mut best: Option<(u64, u64, u64)> = None;
    for low in min..max {
        for high in low..max {
            let product = low * high;
            if best.is_none_or(|(p, _, _)| product > p) && palindrome.check(product) {
                best = Some((product, low, high));
            }
        }
    }
    best.map(|(_, low, high)| (low, high))
}

#[cfg(test)]
mod tests {
    use eulerbench_core::{ProblemArgs, SolutionFn, SolveError};

    const VERSIONS: [SolutionFn; 3] = [
        super::version001::solution,
        super::version002::solution,
        super::version003::solution,
    ];

    fn assert_all(digits: &str, expected: &str) {
        let args = ProblemArgs::from_pairs([("digits", digits)]);
        for (i, solve) in VERSIONS.iter().enumerate() {
            let answer = solve(&args, None).unwrap();
            assert_eq!(answer.as_str(), expected, "version {} with {digits} digits", i + 1);
        }
    }

    #[test]
    fn test_one_digit_tie_breaks_alike() {
        // 1 x 9 and 3 x 3 both give 9
        assert_all("1", "[1, 9]");
    }

    #[test]
    fn test_two_digits() {
        assert_all("2", "[91, 99]");
    }

    #[test]
    fn test_three_digits() {
        assert_all("3", "[913, 993]");
    }

    #[test]
    fn test_digits_out_of_range() {
        for digits in ["0", "10"] {
            let args = ProblemArgs::from_pairs([("digits", digits)]);
            for solve in VERSIONS {
                assert!(matches!(
                    solve(&args, None),
                    Err(SolveError::InvalidArgument { .. })
                ));
            }
        }
    }
}
