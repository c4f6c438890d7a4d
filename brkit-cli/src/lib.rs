//! brkit CLI library
//!
//! Command implementations, output formatters, input resolution and
//! progress reporting for the `brkit` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
