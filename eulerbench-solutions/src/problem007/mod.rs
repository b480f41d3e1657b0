#[allow(clippy::module_inception)]
mod problem007;

pub use problem007::Problem007;

pub mod version001;
