pub mod commander;
pub mod models;

pub use commander::Commander;
pub use models::{Cli, Command, GeneratedValue, Report};
