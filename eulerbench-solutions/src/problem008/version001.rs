use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Longest window whose product of nines still fits in a `u128`
const MAX_DIGITS: usize = 38;

/// Go through the entire number and calculate the product of every window
/// of the requested width, then find the maximum.
#[version(problem = 8, id = 1, name = "Bruteforce")]
pub fn solution(
    args: &ProblemArgs,
    resources: Option<&ResourceBundle>,
) -> Result<Answer, SolveError> {
    let digits: usize = args.get("digits")?;
    if !(1..=MAX_DIGITS).contains(&digits) {
        return Err(SolveError::InvalidArgument {
            name: "digits".into(),
            reason: format!("must be between 1 and {MAX_DIGITS}, got {digits}"),
        });
    }
    let number = resources
        .and_then(ResourceBundle::digits)
        .ok_or_else(|| SolveError::MissingResource("expected an integer resource".into()))?;

    let values: Vec<u128> = number
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u128::from)
        .collect();
    // a window wider than the number has no product at all
    let largest = values
        .windows(digits)
        .map(|window| window.iter().product::<u128>())
        .max()
        .unwrap_or(0);
    Ok(largest.into())
}
