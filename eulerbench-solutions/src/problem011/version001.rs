use super::{DIRECTIONS, Quadruple, grid};
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Go through all four-adjacent values (horizontal, vertical and both
/// diagonals) in the grid and find the maximum product.
#[version(problem = 11, id = 1, name = "Bruteforce")]
pub fn solution(
    _: &ProblemArgs,
    resources: Option<&ResourceBundle>,
) -> Result<Answer, SolveError> {
    let grid = grid(resources)?;

    let best = DIRECTIONS
        .iter()
        .filter_map(|direction| direction.best(grid))
        .reduce(Quadruple::greater);

    best.map(Quadruple::answer).ok_or(SolveError::NoSolution)
}
