use super::bruteforce;
use eulerbench_core::{Answer, ProblemArgs, ResourceBundle, SolveError, version};

/// Primitive triplets with c < 300, as `[a, b, c, a + b + c]`
const PRIMITIVES: [[u64; 4]; 47] = [
    [3, 4, 5, 12], [5, 12, 13, 30], [8, 15, 17, 40],
    [7, 24, 25, 56], [20, 21, 29, 70], [12, 35, 37, 84],
    [9, 40, 41, 90], [28, 45, 53, 126], [11, 60, 61, 132],
    [16, 63, 65, 144], [33, 56, 65, 154], [48, 55, 73, 176],
    [13, 84, 85, 182], [36, 77, 85, 198], [39, 80, 89, 208],
    [65, 72, 97, 234], [20, 99, 101, 220], [60, 91, 109, 260],
    [15, 112, 113, 240], [44, 117, 125, 286], [88, 105, 137, 330],
    [17, 144, 145, 306], [24, 143, 145, 312], [51, 140, 149, 340],
    [85, 132, 157, 374], [119, 120, 169, 408], [52, 165, 173, 390],
    [19, 180, 181, 380], [57, 176, 185, 418], [104, 153, 185, 442],
    [95, 168, 193, 456], [28, 195, 197, 420], [84, 187, 205, 476],
    [133, 156, 205, 494], [21, 220, 221, 462], [140, 171, 221, 532],
    [60, 221, 229, 510], [105, 208, 233, 546], [120, 209, 241, 570],
    [32, 255, 257, 544], [23, 264, 265, 552], [96, 247, 265, 608],
    [69, 260, 269, 598], [115, 252, 277, 644], [160, 231, 281, 672],
    [161, 240, 289, 690], [68, 285, 293, 646],
];

/// Shortcut the bruteforce method: if the sum is a multiple of the
/// perimeter of a known primitive triplet, scale that triplet up.
///
/// If no primitive triplet divides the sum, fall back on the bruteforce
/// method.
#[version(problem = 9, id = 2, name = "Hardcoded Shortcut")]
pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;

    let scaled = PRIMITIVES
        .iter()
        .find(|[.., perimeter]| number > 0 && number % perimeter == 0)
        .map(|&[a, b, c, perimeter]| {
            let k = number / perimeter;
            [a * k, b * k, c * k]
        });

    let triplet = scaled
        .or_else(|| bruteforce(number))
        .ok_or(SolveError::NoSolution)?;
    Ok(Answer::tuple(triplet))
}
