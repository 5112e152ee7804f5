//! Command-line interface.

mod args;
pub mod check;
pub mod query;

pub use args::{Cli, Commands, QuerySection};
