use super::{bottom_up, factor_bounds};
use crate::utils::PalindromeAlgorithm;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Try every pair of n-digit factors and keep the largest palindromic
/// product, comparing each product's decimal string with its reverse.
#[version(problem = 4, id = 1, name = "Bruteforce Bottom-up (String Palindrome)")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let bounds = factor_bounds(args)?;
    let (low, high) =
        bottom_up(bounds, PalindromeAlgorithm::StrCompare).ok_or(SolveError::NoSolution)?;
    Ok(Answer::list([low, high]))
}
