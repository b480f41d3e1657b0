use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Brute force, iterate through all integers below the limit.
#[version(problem = 1, id = 1, name = "Brute Force, Iterative")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;
    let sum: u128 = (1..number)
        .filter(|n| n % 3 == 0 || n % 5 == 0)
        .map(u128::from)
        .sum();
    Ok(sum.into())
}
