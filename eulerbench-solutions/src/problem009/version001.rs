use super::bruteforce;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Run through all combinations of a < b < c with the given sum until
/// a^2 + b^2 = c^2.
#[version(problem = 9, id = 1, name = "Bruteforce")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;
    let triplet = bruteforce(number).ok_or(SolveError::NoSolution)?;
    Ok(Answer::tuple(triplet))
}
