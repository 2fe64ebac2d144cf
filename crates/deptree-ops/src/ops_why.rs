//! Operation: explain why a distribution is part of the tree.

use deptree_resolver::Resolver;

/// Options for `deptree why`.
#[derive(Debug, Default)]
pub struct WhyOptions {
    pub names: Vec<String>,
    /// Distribution to look for.
    pub target: String,
}

/// Show the first path from a root down to the target distribution.
pub fn why(resolver: &dyn Resolver, opts: &WhyOptions) -> miette::Result<String> {
    let tree = resolver.resolve(&opts.names)?;
    let target = &opts.target;

    let Some(path) = tree.find_path(target) else {
        return Ok(format!("Distribution '{target}' not found in the tree.\n"));
    };

    let mut output = format!("Path to {target}:\n");
    for (i, name) in path.iter().enumerate() {
        let indent = "  ".repeat(i);
        output.push_str(&format!("{indent}{name}\n"));
    }
    Ok(output)
}
