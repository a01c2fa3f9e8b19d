//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod query;

pub use args::{BuildArgs, Cli, Commands, QueryArgs, QueryFormat};
