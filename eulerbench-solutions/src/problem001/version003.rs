use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Multiples of 3 or 5 within one block of 15: 3, 5, 6, 9, 10, 12 and 15
const BLOCK_MULTIPLES: u128 = 7;
const BLOCK_SUM: u128 = 60;

/// A slightly more formulaic approach, but still iterative.
///
/// Every block of 15 integers holds the same seven multiples, shifted by 15
/// per block. Add whole blocks at once, then iterate over the remainder.
#[version(problem = 1, id = 3, name = "Brute Force, Even Smarter Iteration")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;
    let last = number.saturating_sub(1);
    let blocks = last / 15;

    let mut sum: u128 = 0;
    for block in 0..u128::from(blocks) {
        sum += BLOCK_SUM + 15 * BLOCK_MULTIPLES * block;
    }
    for n in blocks * 15 + 1..=last {
        if n % 3 == 0 || n % 5 == 0 {
            sum += u128::from(n);
        }
    }
    Ok(sum.into())
}
