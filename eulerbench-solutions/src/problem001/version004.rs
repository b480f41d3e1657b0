use crate::utils::arithmetic_sum;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// A formulaic approach, constant time.
///
/// The multiples of 3 below the limit form an arithmetic series, as do the
/// multiples of 5. Their sums count every multiple of 15 twice, so subtract
/// the series of multiples of 15 once.
#[version(problem = 1, id = 4, name = "Formulaic Approach")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;
    let last = number.saturating_sub(1);

    let multiples = |k: u64| arithmetic_sum(k, last / k * k, k);
    let sum = multiples(3) + multiples(5) - multiples(15);
    Ok(sum.into())
}
