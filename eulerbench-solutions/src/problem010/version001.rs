use crate::utils::PrimeCache;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Sieve every prime below the limit with the shared prime utilities and
/// sum them.
#[version(problem = 10, id = 1, name = "Using Prime Utilities")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;

    let cache = PrimeCache::with_limit(number.saturating_sub(1));
    let sum: u64 = cache
        .as_slice()
        .iter()
        .take_while(|&&p| p < number)
        .sum();
    Ok(sum.into())
}
