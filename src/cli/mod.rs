//! # Command-Line Interface
//!
//! Owns the process lifecycle: argument parsing, config loading, store
//! selection, and the server runtime. `main.rs` delegates here.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
