#[allow(clippy::module_inception)]
mod problem003;

pub use problem003::Problem003;

pub mod version001;
