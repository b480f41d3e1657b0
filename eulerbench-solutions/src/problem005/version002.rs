use super::{overflow, upper_bound};
use crate::utils::PrimeCache;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};
use std::collections::BTreeMap;

/// Determine the smallest number divisible by all the numbers in the given
/// range using prime factors of each of the numbers in the given range.
///
/// The answer holds every prime at the highest power it reaches in any
/// single number of the range.
#[version(problem = 5, id = 2, name = "Prime Factorization")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number = upper_bound(args)?;

    let mut cache = PrimeCache::new();
    let mut powers: BTreeMap<u64, u32> = BTreeMap::new();
    for n in 2..=number {
        for (prime, exponent) in cache.factorize(n) {
            let power = powers.entry(prime).or_default();
            *power = (*power).max(exponent);
        }
    }

    let mut multiple: u64 = 1;
    for (prime, exponent) in powers {
        multiple = prime
            .checked_pow(exponent)
            .and_then(|factor| multiple.checked_mul(factor))
            .ok_or_else(overflow)?;
    }
    Ok(multiple.into())
}
