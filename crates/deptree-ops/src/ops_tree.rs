//! Operation: display the dependency tree.

use deptree_resolver::Resolver;

/// Options for `deptree tree`.
#[derive(Debug, Default)]
pub struct TreeOptions {
    pub names: Vec<String>,
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
}

pub fn tree(resolver: &dyn Resolver, opts: &TreeOptions) -> miette::Result<String> {
    let tree = resolver.resolve(&opts.names)?;
    if tree.is_empty() {
        return Ok("No distributions.\n".to_string());
    }
    Ok(tree.print_tree(opts.depth))
}
