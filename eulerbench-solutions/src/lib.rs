//! EulerBench Solutions
//!
//! Project Euler problems registered with the harness. Each problem lives in
//! its own module laid out the way the naming convention expects:
//!
//! ```text
//! problem001/
//! ├── mod.rs           module wiring
//! ├── problem001.rs    #[problem] metadata
//! ├── version001.rs    #[version] entry point
//! └── version002.rs
//! ```
//!
//! Shared helpers (primes, palindromes, series) live in [`utils`].

pub mod problem001;
pub mod problem002;
pub mod problem003;
pub mod problem004;
pub mod problem005;
pub mod problem006;
pub mod problem007;
pub mod problem008;
pub mod problem009;
pub mod problem010;
pub mod problem011;
pub mod utils;

use eulerbench_core::{ProblemId, SolutionFn};
use std::hint::black_box;

/// Keep every registration of this crate in the final binary
///
/// Registrations are collected at link time, and a linker is free to drop
/// object files nothing refers to. Call this once from `main` before building
/// the `Catalog`. Returns the ids of the problems compiled in.
pub fn link() -> Vec<ProblemId> {
    let entry_points: [SolutionFn; 21] = [
        problem001::version001::solution,
        problem001::version002::solution,
        problem001::version003::solution,
        problem001::version004::solution,
        problem002::version001::solution,
        problem002::version002::solution,
        problem002::version003::solution,
        problem003::version001::solution,
        problem004::version001::solution,
        problem004::version002::solution,
        problem004::version003::solution,
        problem005::version001::solution,
        problem005::version002::solution,
        problem006::version001::solution,
        problem007::version001::solution,
        problem008::version001::solution,
        problem009::version001::solution,
        problem009::version002::solution,
        problem010::version001::solution,
        problem011::version001::solution,
        problem011::version002::solution,
    ];
    black_box(&entry_points);

    vec![
        problem001::Problem001::id(),
        problem002::Problem002::id(),
        problem003::Problem003::id(),
        problem004::Problem004::id(),
        problem005::Problem005::id(),
        problem006::Problem006::id(),
        problem007::Problem007::id(),
        problem008::Problem008::id(),
        problem009::Problem009::id(),
        problem010::Problem010::id(),
        problem011::Problem011::id(),
    ]
}
