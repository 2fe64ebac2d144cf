//! Operation: render the resolved tree as JSON.

use deptree_resolver::Resolver;

/// Options for `deptree json`.
#[derive(Debug, Default)]
pub struct JsonOptions {
    /// Root distributions to resolve.
    pub names: Vec<String>,
    /// Indent unit; empty renders a single line.
    pub indent: String,
}

/// Resolve the roots and render them as JSON.
pub fn json(resolver: &dyn Resolver, opts: &JsonOptions) -> miette::Result<String> {
    let tree = resolver.resolve(&opts.names)?;
    Ok(tree.to_json(&opts.indent))
}
