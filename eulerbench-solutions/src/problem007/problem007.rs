use eulerbench_core::problem;

/// By listing the first six prime numbers: 2, 3, 5, 7, 11, and 13, we can
/// see that the 6th prime is 13. What is the 10 001st prime number?
#[problem(id = 7, name = "10001st prime", params = ["n=10001"])]
pub struct Problem007;
