//! Command-line front end.

pub mod commands;
pub mod request;

pub use commands::{Cli, Commands, run, run_session};
