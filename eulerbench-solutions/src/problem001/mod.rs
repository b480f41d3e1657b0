#[allow(clippy::module_inception)]
mod problem001;

pub use problem001::Problem001;

pub mod version001;
pub mod version002;
pub mod version003;
pub mod version004;
