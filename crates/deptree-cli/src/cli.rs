//! CLI argument definitions for deptree.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "deptree",
    version,
    about = "Resolve and print dependency trees of software distributions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Package index to resolve against (defaults to the nearest Deptree.toml)
    #[arg(short, long, global = true, env = "DEPTREE_INDEX")]
    pub index: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dependency tree as JSON
    Json {
        /// Root distributions
        #[arg(required = true)]
        names: Vec<String>,
        /// Indent unit for pretty output (overrides the config)
        #[arg(long, conflicts_with = "compact")]
        indent: Option<String>,
        /// Render on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Print the dependency tree as text
    Tree {
        /// Root distributions
        #[arg(required = true)]
        names: Vec<String>,
        /// Maximum depth to display
        #[arg(short, long)]
        depth: Option<u32>,
    },

    /// Show how a distribution is reached from the roots
    Why {
        /// Distribution to look for
        target: String,
        /// Root distributions
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Validate the package index
    Check,
}

pub fn parse() -> Cli {
    Cli::parse()
}
