use eulerbench_core::problem;

/// The resource file for this problem contains a 20x20 grid. What is the
/// greatest product of four adjacent numbers in the same direction (up,
/// down, left, right, or diagonally) in the grid?
#[problem(id = 11, name = "Largest product in a grid")]
pub struct Problem011;
