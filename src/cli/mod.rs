//! Command-line interface.

mod args;
pub mod migrate;

pub use args::Cli;
