#[allow(clippy::module_inception)]
mod problem010;

pub use problem010::Problem010;

pub mod version001;
