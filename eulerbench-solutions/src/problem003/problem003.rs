use eulerbench_core::problem;

/// The prime factors of 13195 are 5, 7, 13 and 29. What is the largest
/// prime factor of the number 600851475143 ?
#[problem(id = 3, name = "Largest prime factor", params = ["number=600851475143"])]
pub struct Problem003;
