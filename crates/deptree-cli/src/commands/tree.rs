//! Handler for `deptree tree`.

use std::path::Path;

use miette::Result;

use deptree_ops::ops_tree::{self, TreeOptions};
use deptree_util::errors::DeptreeError;

pub fn exec(index: Option<&Path>, names: Vec<String>, depth: Option<u32>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(DeptreeError::Io)?;
    let config = deptree_ops::load_config();
    let resolver = deptree_ops::index_resolver(index, &config, &cwd)?;

    let opts = TreeOptions {
        names,
        depth: depth.map(|d| d as usize),
    };

    print!("{}", ops_tree::tree(&resolver, &opts)?);
    Ok(())
}
