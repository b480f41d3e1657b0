use super::{bottom_up, factor_bounds};
use crate::utils::PalindromeAlgorithm;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Try every pair of n-digit factors and keep the largest palindromic
/// product, reversing each product's digits arithmetically.
#[version(problem = 4, id = 2, name = "Bruteforce Bottom-up (Integer Palindrome)")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let bounds = factor_bounds(args)?;
    let (low, high) =
        bottom_up(bounds, PalindromeAlgorithm::IntCompare).ok_or(SolveError::NoSolution)?;
    Ok(Answer::list([low, high]))
}
