use eulerbench_core::problem;

/// The resource file for this problem contains a 1000-digit number. In this
/// 1000-digit number, there are four adjacent digits that have the greatest
/// product; they are 9 x 9 x 8 x 9 = 5832. Find the thirteen adjacent
/// digits in the 1000-digit number that have the greatest product. What is
/// the value of this product?
#[problem(id = 8, name = "Largest product in a series", params = ["digits=13"])]
pub struct Problem008;
