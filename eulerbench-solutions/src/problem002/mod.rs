#[allow(clippy::module_inception)]
mod problem002;

pub use problem002::Problem002;

pub mod version001;
pub mod version002;
pub mod version003;

#[cfg(test)]
mod tests {
    use eulerbench_core::{ProblemArgs, SolutionFn};

    const VERSIONS: [SolutionFn; 3] = [
        super::version001::solution,
        super::version002::solution,
        super::version003::solution,
    ];

    fn assert_all(number: &str, expected: &str) {
        let args = ProblemArgs::from_pairs([("number", number)]);
        for (i, solve) in VERSIONS.iter().enumerate() {
            let answer = solve(&args, None).unwrap();
            assert_eq!(answer.as_str(), expected, "version {} with {number}", i + 1);
        }
    }

    #[test]
    fn test_small_limits() {
        assert_all("1", "0");
        assert_all("2", "2");
        assert_all("8", "10");
        assert_all("100", "44");
    }

    #[test]
    fn test_four_million() {
        assert_all("4000000", "4613732");
    }

    #[test]
    fn test_largest_limit_does_not_overflow() {
        let args = ProblemArgs::from_pairs([("number", u64::MAX.to_string())]);
        let answers: Vec<_> = VERSIONS.iter().map(|s| s(&args, None).unwrap()).collect();
        assert!(answers.windows(2).all(|w| w[0] == w[1]));
    }
}
