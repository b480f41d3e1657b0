#[allow(clippy::module_inception)]
mod problem005;

pub use problem005::Problem005;

pub mod version001;
pub mod version002;

use eulerbench_core::{ProblemArgs, SolveError};

fn upper_bound(args: &ProblemArgs) -> Result<u64, SolveError> {
    let number: u64 = args.get("number")?;
    if number == 0 {
        return Err(SolveError::InvalidArgument {
            name: "number".into(),
            reason: "must be at least 1".into(),
        });
    }
    Ok(number)
}

fn overflow() -> SolveError {
    SolveError::Other("smallest multiple does not fit in 64 bits".into())
}

#[cfg(test)]
mod tests {
    use eulerbench_core::{ProblemArgs, SolutionFn, SolveError};

    const VERSIONS: [SolutionFn; 2] = [super::version001::solution, super::version002::solution];

    fn assert_all(number: &str, expected: &str) {
        let args = ProblemArgs::from_pairs([("number", number)]);
        for (i, solve) in VERSIONS.iter().enumerate() {
            let answer = solve(&args, None).unwrap();
            assert_eq!(answer.as_str(), expected, "version {} up to {number}", i + 1);
        }
    }

    #[test]
    fn test_examples() {
        assert_all("1", "1");
        assert_all("10", "2520");
        assert_all("20", "232792560");
    }

    #[test]
    fn test_zero_is_rejected() {
        let args = ProblemArgs::from_pairs([("number", "0")]);
        for solve in VERSIONS {
            assert!(matches!(
                solve(&args, None),
                Err(SolveError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_factorization_overflow() {
        let args = ProblemArgs::from_pairs([("number", "50")]);
        assert!(matches!(
            super::version002::solution(&args, None),
            Err(SolveError::Other(_))
        ));
    }
}
