//! Handler for `deptree check`.

use std::path::Path;

use miette::Result;

use deptree_ops::ops_check;
use deptree_util::errors::DeptreeError;

pub fn exec(index: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(DeptreeError::Io)?;
    let config = deptree_ops::load_config();
    let resolver = deptree_ops::index_resolver(index, &config, &cwd)?;

    if resolver.index().is_empty() {
        deptree_util::status::status_warn("Warning", "index defines no packages");
    }
    let summary = ops_check::check(resolver.index())?;
    deptree_util::status::status("Checked", &summary);
    Ok(())
}
