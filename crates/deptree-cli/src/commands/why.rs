//! Handler for `deptree why`.

use std::path::Path;

use miette::Result;

use deptree_ops::ops_why::{self, WhyOptions};
use deptree_util::errors::DeptreeError;

pub fn exec(index: Option<&Path>, names: Vec<String>, target: String) -> Result<()> {
    let cwd = std::env::current_dir().map_err(DeptreeError::Io)?;
    let config = deptree_ops::load_config();
    let resolver = deptree_ops::index_resolver(index, &config, &cwd)?;

    let opts = WhyOptions { names, target };
    print!("{}", ops_why::why(&resolver, &opts)?);
    Ok(())
}
