use super::{DIRECTIONS, Quadruple, grid};
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};
use rayon::prelude::*;

/// Go through all four-adjacent values (horizontal, vertical and both
/// diagonals) in the grid and find the maximum product.
///
/// Each direction is scanned as its own parallel task.
#[version(problem = 11, id = 2, name = "Bruteforce (Multithreaded)")]
pub fn solution(
    _: &ProblemArgs,
    resources: Option<&ResourceBundle>,
) -> Result<Answer, SolveError> {
    let grid = grid(resources)?;

    let per_direction: Vec<Option<Quadruple>> = DIRECTIONS
        .par_iter()
        .map(|direction| direction.best(grid))
        .collect();

    // combined in direction order so ties resolve as in the sequential scan
    let best = per_direction.into_iter().flatten().reduce(Quadruple::greater);

    best.map(Quadruple::answer).ok_or(SolveError::NoSolution)
}
