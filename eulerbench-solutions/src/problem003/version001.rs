use crate::utils::PrimeCache;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Find the largest prime factor by dividing out every prime factor in
/// ascending order, using the shared prime cache.
#[version(problem = 3, id = 1, name = "Using Prime Utilities")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let mut number: u64 = args.get("number")?;
    if number < 2 {
        return Err(SolveError::InvalidArgument {
            name: "number".into(),
            reason: format!("{number} has no prime factors"),
        });
    }

    let mut cache = PrimeCache::new();
    let mut largest = 1;
    for prime in cache.iter() {
        if prime.saturating_mul(prime) > number {
            break;
        }
        while number % prime == 0 {
            number /= prime;
            largest = prime;
        }
    }
    // a remainder above 1 is a prime larger than every factor divided out
    if number > 1 {
        largest = number;
    }
    Ok(largest.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn largest_factor(number: &str) -> Result<Answer, SolveError> {
        solution(&ProblemArgs::from_pairs([("number", number)]), None)
    }

    #[test]
    fn test_examples() {
        assert_eq!(largest_factor("13195").unwrap().as_str(), "29");
        assert_eq!(largest_factor("600851475143").unwrap().as_str(), "6857");
    }

    #[test]
    fn test_repeated_factors() {
        // 2^10 and 3^4 * 7^2: a single division per prime would miss these
        assert_eq!(largest_factor("1024").unwrap().as_str(), "2");
        assert_eq!(largest_factor("3969").unwrap().as_str(), "7");
    }

    #[test]
    fn test_prime_input() {
        assert_eq!(largest_factor("104743").unwrap().as_str(), "104743");
    }

    #[test]
    fn test_no_factors() {
        assert!(matches!(
            largest_factor("1"),
            Err(SolveError::InvalidArgument { .. })
        ));
    }
}
