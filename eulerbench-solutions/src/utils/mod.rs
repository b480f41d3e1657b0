//! Math utilities shared by the solutions

pub mod algebra;
pub mod palindrome;
pub mod primes;

pub use algebra::arithmetic_sum;
pub use palindrome::{PalindromeAlgorithm, is_palindrome_int, is_palindrome_str};
pub use primes::{PrimeCache, PrimeIter};
