use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Cube of the Fibonacci matrix `[[1, 1], [1, 0]]`
const A3: [[u128; 2]; 2] = [[3, 2], [2, 1]];

/// Calculate each even Fibonacci number using matrix math and sum them.
///
/// `A3 * (F(n+1), F(n))` yields `(F(n+4), F(n+3))`, so starting from the
/// first even term every product lands on the next even term.
#[version(problem = 2, id = 3, name = "Brute Force Matrix Math")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;
    let limit = u128::from(number);

    let mut sum: u128 = 0;
    let mut f: [u128; 2] = [3, 2];
    while f[1] <= limit {
        sum += f[1];
        f = [
            A3[0][0] * f[0] + A3[0][1] * f[1],
            A3[1][0] * f[0] + A3[1][1] * f[1],
        ];
    }
    Ok(sum.into())
}
