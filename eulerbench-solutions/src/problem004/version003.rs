use super::factor_bounds;
use crate::utils::is_palindrome_int;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};
use rayon::prelude::*;
use std::cmp::Reverse;

/// A parallelized bottom-up greedy algorithm.
///
/// For every smaller factor, scan the larger factor downwards and stop at
/// the first palindrome, which is the best product for that smaller factor.
/// The scans run in parallel and the best product overall wins.
#[version(problem = 4, id = 3, name = "Parallelized Greedy")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let (min, max) = factor_bounds(args)?;

    let (_, low, high) = (min..max)
        .into_par_iter()
        .filter_map(|low| {
            (low..max)
                .rev()
                .find(|high| is_palindrome_int(low * high))
                .map(|high| (low * high, low, high))
        })
        // equal products resolve to the smaller factor pair
        .max_by_key(|&(product, low, _)| (product, Reverse(low)))
        .ok_or(SolveError::NoSolution)?;

    Ok(Answer::list([low, high]))
}
