use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Gaps between consecutive multiples of 3 or 5, starting from 3
const STEPS: [u64; 7] = [2, 1, 3, 1, 2, 3, 3];

/// Brute force, only visit integers divisible by 3 or 5 by stepping
/// through the gaps between them.
#[version(problem = 1, id = 2, name = "Brute Force, Smarter Iteration")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;

    let mut sum: u128 = 0;
    let mut n: u64 = 3;
    for step in STEPS.iter().cycle() {
        if n >= number {
            break;
        }
        sum += u128::from(n);
        let Some(next) = n.checked_add(*step) else {
            break;
        };
        n = next;
    }
    Ok(sum.into())
}
