//! Operation: validate a package index.

use deptree_resolver::index::PackageIndex;
use deptree_util::errors::DeptreeError;

/// Check that every dependency is defined and that there are no cycles.
///
/// Returns a one-line summary on success.
pub fn check(index: &PackageIndex) -> miette::Result<String> {
    let mut problems = Vec::new();

    for missing in index.missing_dependencies() {
        problems.push(format!(
            "{} depends on undefined package {}",
            missing.package, missing.dependency
        ));
    }
    if let Some(cycle) = index.find_cycle() {
        problems.push(format!("cycle between {}", cycle.join(", ")));
    }

    if !problems.is_empty() {
        return Err(DeptreeError::Index {
            message: problems.join("; "),
        }
        .into());
    }

    Ok(format!("Index OK: {} package(s)", index.len()))
}
