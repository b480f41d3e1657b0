use crate::utils::PrimeCache;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Find the nth prime number using the shared prime cache.
#[version(problem = 7, id = 1, name = "Using Prime Utilities")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let n: usize = args.get("n")?;
    let prime = PrimeCache::new()
        .nth(n)
        .ok_or_else(|| SolveError::InvalidArgument {
            name: "n".into(),
            reason: "primes are counted from 1".into(),
        })?;
    Ok(prime.into())
}
