use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Calculate each Fibonacci number and sum only the even ones. Skip the
/// even check to reduce branching.
///
/// Every third Fibonacci number is even, so advance three terms at a time
/// and add each one that stays within the limit.
#[version(problem = 2, id = 2, name = "Brute Force, but Skip Some")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;
    let limit = u128::from(number);

    let mut sum: u128 = 0;
    let (mut even, mut next): (u128, u128) = (2, 3);
    while even <= limit {
        sum += even;
        for _ in 0..3 {
            (even, next) = (next, even + next);
        }
    }
    Ok(sum.into())
}
