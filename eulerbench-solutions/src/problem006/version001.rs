use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Manually calculate the sum of squares and the square of the sum.
#[version(problem = 6, id = 1, name = "Bruteforce")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;

    // the sum of squares never exceeds the square of the sum
    let n = u128::from(number);
    let total = n * (n + 1) / 2;
    if total.checked_mul(total).is_none() {
        return Err(SolveError::InvalidArgument {
            name: "number".into(),
            reason: "square of the sum does not fit in 128 bits".into(),
        });
    }

    let (sum, sum_of_squares) =
        (1..=n).fold((0u128, 0u128), |(sum, squares), k| (sum + k, squares + k * k));
    let difference = sum * sum - sum_of_squares;
    Ok(difference.into())
}
