#[allow(clippy::module_inception)]
mod problem011;

pub use problem011::Problem011;

pub mod version001;
pub mod version002;

use eulerbench_core::{Answer, ResourceBundle, SolveError};

/// Number of adjacent values multiplied together
const RUN: usize = 4;

/// Line along which adjacent values are taken, as a row and column step
#[derive(Debug, Clone, Copy)]
struct Direction {
    row_step: usize,
    col_step: isize,
}

/// Right, down, down-right and down-left, in scan order
const DIRECTIONS: [Direction; 4] = [
    Direction { row_step: 0, col_step: 1 },
    Direction { row_step: 1, col_step: 0 },
    Direction { row_step: 1, col_step: 1 },
    Direction { row_step: 1, col_step: -1 },
];

/// Adjacent values and their product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Quadruple {
    values: [i64; RUN],
    product: i128,
}

impl Quadruple {
    /// The larger of two quadruples; `self` wins ties
    fn greater(self, other: Self) -> Self {
        if other.product > self.product { other } else { self }
    }

    fn answer(self) -> Answer {
        Answer::tuple(self.values)
    }
}

impl Direction {
    /// Values starting at `(row, col)`, or `None` if the run leaves the grid
    fn run(&self, grid: &[Vec<i64>], row: usize, col: usize) -> Option<Quadruple> {
        let mut values = [0; RUN];
        for (i, value) in values.iter_mut().enumerate() {
            let r = row + i * self.row_step;
            let c = col.checked_add_signed(i as isize * self.col_step)?;
            *value = *grid.get(r)?.get(c)?;
        }
        let product = values
            .iter()
            .fold(1i128, |acc, &v| acc.saturating_mul(i128::from(v)));
        Some(Quadruple { values, product })
    }

    /// Largest product along this direction, scanning row by row
    fn best(&self, grid: &[Vec<i64>]) -> Option<Quadruple> {
        let mut best: Option<Quadruple> = None;
        for (row, cells) in grid.iter().enumerate() {
            for col in 0..cells.len() {
                let Some(candidate) = self.run(grid, row, col) else {
                    continue;
                };
                best = Some(match best {
                    Some(current) => current.greater(candidate),
                    None => candidate,
                });
            }
        }
        best
    }
}

fn grid(resources: Option<&ResourceBundle>) -> Result<&[Vec<i64>], SolveError> {
    resources
        .and_then(ResourceBundle::matrix)
        .ok_or_else(|| SolveError::MissingResource("expected a matrix resource".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eulerbench_core::{ProblemArgs, SolutionFn};
    use std::path::Path;

    const VERSIONS: [SolutionFn; 2] = [version001::solution, version002::solution];

    fn solve_all(bundle: Option<&ResourceBundle>) -> Vec<Result<Answer, SolveError>> {
        let args = ProblemArgs::default();
        VERSIONS.iter().map(|solve| solve(&args, bundle)).collect()
    }

    #[test]
    fn test_resource_grid() {
        let content = include_str!("../../../resources/problem011.txt");
        let bundle = ResourceBundle::parse(Path::new("problem011.txt"), content).unwrap();
        for answer in solve_all(Some(&bundle)) {
            // 89 * 94 * 97 * 87 = 70600674, on a down-left diagonal
            assert_eq!(answer.unwrap().as_str(), "(89, 94, 97, 87)");
        }
    }

    #[test]
    fn test_runs_stay_inside_grid() {
        let grid = vec![vec![1, 2, 3, 4, 5]; 4];
        assert!(DIRECTIONS[0].run(&grid, 0, 1).is_some());
        assert!(DIRECTIONS[0].run(&grid, 0, 2).is_none());
        assert!(DIRECTIONS[1].run(&grid, 1, 0).is_none());
        assert!(DIRECTIONS[3].run(&grid, 0, 2).is_none());
        let diagonal = DIRECTIONS[3].run(&grid, 0, 3).unwrap();
        assert_eq!(diagonal.values, [4, 3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_first_direction() {
        // every run multiplies to 1; the first horizontal run wins
        let grid = vec![vec![1; 4]; 4];
        let bundle = ResourceBundle::Matrix(grid);
        for answer in solve_all(Some(&bundle)) {
            assert_eq!(answer.unwrap().as_str(), "(1, 1, 1, 1)");
        }
    }

    #[test]
    fn test_negative_values() {
        let bundle = ResourceBundle::Matrix(vec![vec![-1, -2, -3, -4]]);
        for answer in solve_all(Some(&bundle)) {
            assert_eq!(answer.unwrap().as_str(), "(-1, -2, -3, -4)");
        }
    }

    #[test]
    fn test_grid_too_small() {
        let bundle = ResourceBundle::Matrix(vec![vec![9, 9, 9]; 3]);
        for answer in solve_all(Some(&bundle)) {
            assert_eq!(answer, Err(SolveError::NoSolution));
        }
    }

    #[test]
    fn test_missing_resource() {
        for answer in solve_all(None) {
            assert!(matches!(answer, Err(SolveError::MissingResource(_))));
        }
        let text = ResourceBundle::Text("grid".into());
        for answer in solve_all(Some(&text)) {
            assert!(matches!(answer, Err(SolveError::MissingResource(_))));
        }
    }
}
