use super::{overflow, upper_bound};
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Bottom-up brute force: step through the multiples of the upper bound
/// until one is divisible by every smaller number.
#[version(problem = 5, id = 1, name = "Bruteforce")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number = upper_bound(args)?;

    let mut candidate = number;
    // larger divisors reject a candidate sooner
    while !(2..number).rev().all(|d| candidate % d == 0) {
        candidate = candidate.checked_add(number).ok_or_else(overflow)?;
    }
    Ok(candidate.into())
}
