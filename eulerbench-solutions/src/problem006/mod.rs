#[allow(clippy::module_inception)]
mod problem006;

pub use problem006::Problem006;

pub mod version001;
