#[allow(clippy::module_inception)]
mod problem008;

pub use problem008::Problem008;

pub mod version001;
