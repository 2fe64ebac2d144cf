//! Command dispatch and handler modules.

mod check;
mod json;
mod tree;
mod why;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let index = cli.index.as_deref();
    match cli.command {
        Command::Json {
            names,
            indent,
            compact,
        } => json::exec(index, names, indent, compact),
        Command::Tree { names, depth } => tree::exec(index, names, depth),
        Command::Why { target, names } => why::exec(index, names, target),
        Command::Check => check::exec(index),
    }
}
