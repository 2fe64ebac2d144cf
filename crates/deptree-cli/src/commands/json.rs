//! Handler for `deptree json`.

use std::path::Path;

use miette::Result;

use deptree_ops::ops_json::{self, JsonOptions};
use deptree_util::errors::DeptreeError;

pub fn exec(
    index: Option<&Path>,
    names: Vec<String>,
    indent: Option<String>,
    compact: bool,
) -> Result<()> {
    let cwd = std::env::current_dir().map_err(DeptreeError::Io)?;
    let config = deptree_ops::load_config();
    let resolver = deptree_ops::index_resolver(index, &config, &cwd)?;

    let indent = if compact {
        String::new()
    } else {
        indent.unwrap_or(config.output.indent)
    };
    let opts = JsonOptions { names, indent };

    println!("{}", ops_json::json(&resolver, &opts)?);
    Ok(())
}
