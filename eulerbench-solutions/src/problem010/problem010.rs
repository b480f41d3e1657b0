use eulerbench_core::problem;

/// The sum of the primes below 10 is 2 + 3 + 5 + 7 = 17. Find the sum of
/// all the primes below two million.
#[problem(id = 10, name = "Summation of primes", params = ["number=2000000"])]
pub struct Problem010;
