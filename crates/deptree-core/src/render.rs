//! Box-drawing tree output and path queries.

use crate::distribution::{Distribution, Distributions};

impl Distributions {
    /// Print the tree to a string, one node per line.
    ///
    /// Nodes deeper than `max_depth` (roots are depth 1) are omitted.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        for dis in self {
            output.push_str(&format!("{dis}\n"));
            print_children(&mut output, &dis.dependencies, "", 2, max_depth);
        }
        output
    }

    /// Find the first path from a root to the distribution named `target`.
    ///
    /// Searches depth-first in sorted order and returns the names along the
    /// path, root first.
    pub fn find_path(&self, target: &str) -> Option<Vec<&str>> {
        let mut path = Vec::new();
        for root in self {
            if dfs_path(root, target, &mut path) {
                return Some(path);
            }
        }
        None
    }
}

fn print_children(
    output: &mut String,
    children: &Distributions,
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
) {
    if let Some(max) = max_depth {
        if depth > max {
            return;
        }
    }
    let count = children.len();
    for (i, dis) in children.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{dis}\n"));

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        print_children(output, &dis.dependencies, &child_prefix, depth + 1, max_depth);
    }
}

fn dfs_path<'a>(current: &'a Distribution, target: &str, path: &mut Vec<&'a str>) -> bool {
    path.push(&current.name);
    if current.name == target {
        return true;
    }
    for dep in &current.dependencies {
        if dfs_path(dep, target, path) {
            return true;
        }
    }
    path.pop();
    false
}
