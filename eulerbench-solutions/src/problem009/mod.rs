#[allow(clippy::module_inception)]
mod problem009;

pub use problem009::Problem009;

pub mod version001;
pub mod version002;

/// First triplet `(a, b, c)` with `a < b < c` and `a + b + c == sum`, by
/// ascending `a`
fn bruteforce(sum: u64) -> Option<[u64; 3]> {
    // a < b < c puts a below a third of the sum and b below half of the rest
    for a in 1..=sum.saturating_sub(1) / 3 {
        for b in a + 1..(sum - a).div_ceil(2) {
            let c = sum - a - b;
            let (a2, b2, c2) = (u128::from(a), u128::from(b), u128::from(c));
            if a2 * a2 + b2 * b2 == c2 * c2 {
                return Some([a, b, c]);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use eulerbench_core::{ProblemArgs, SolutionFn, SolveError};

    const VERSIONS: [SolutionFn; 2] = [super::version001::solution, super::version002::solution];

    #[test]
    fn test_bruteforce() {
        assert_eq!(super::bruteforce(12), Some([3, 4, 5]));
        assert_eq!(super::bruteforce(1000), Some([200, 375, 425]));
        // several triplets sum to 120; the smallest a wins
        assert_eq!(super::bruteforce(120), Some([20, 48, 52]));
        assert_eq!(super::bruteforce(11), None);
        assert_eq!(super::bruteforce(0), None);
    }

    #[test]
    fn test_default_sum() {
        let args = ProblemArgs::from_pairs([("number", "1000")]);
        for solve in VERSIONS {
            assert_eq!(solve(&args, None).unwrap().as_str(), "(200, 375, 425)");
        }
    }

    #[test]
    fn test_no_triplet() {
        for number in ["0", "1", "11"] {
            let args = ProblemArgs::from_pairs([("number", number)]);
            for solve in VERSIONS {
                assert_eq!(solve(&args, None), Err(SolveError::NoSolution));
            }
        }
    }
}
