use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Calculate each Fibonacci number and sum only the even ones.
#[version(problem = 2, id = 1, name = "Brute Force")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;
    let limit = u128::from(number);

    let mut sum: u128 = 0;
    let (mut a, mut b): (u128, u128) = (1, 2);
    while b <= limit {
        if b % 2 == 0 {
            sum += b;
        }
        (a, b) = (b, a + b);
    }
    Ok(sum.into())
}
