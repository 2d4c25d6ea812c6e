//! CLI argument definitions using clap
//!
//! Commands:
//! - hypecat init --config <path>
//! - hypecat start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hypecat - a strict, self-hostable catalog of software frameworks
#[derive(Parser, Debug)]
#[command(name = "hypecat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./hypecat.json")]
        config: PathBuf,
    },

    /// Start the catalog server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./hypecat.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
