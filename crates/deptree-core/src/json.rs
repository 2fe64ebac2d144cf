//! JSON-shaped rendering of a distribution tree.
//!
//! Every distribution becomes a key whose value is the object of its own
//! dependencies, or `{}` for a leaf. Key order is the tree's sorted order.

use std::fmt;

use crate::distribution::Distributions;

impl Distributions {
    /// Render the tree as a JSON object.
    ///
    /// With an empty `indent` the output is a single line. Otherwise every
    /// entry goes on its own line, prefixed by `indent` once per nesting level.
    pub fn to_json(&self, indent: &str) -> String {
        let mut out = String::new();
        write_object(&mut out, self, indent, 0);
        out
    }
}

impl fmt::Display for Distributions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json(""))
    }
}

fn write_object(dst: &mut String, distributions: &Distributions, indent: &str, depth: usize) {
    dst.push('{');
    let depth = depth + 1;
    newline(dst, indent, depth);
    let count = distributions.len();
    for (i, dis) in distributions.iter().enumerate() {
        write_key(dst, &dis.name);
        dst.push_str(": ");
        if dis.is_leaf() {
            dst.push_str("{}");
        } else {
            write_object(dst, &dis.dependencies, indent, depth);
        }
        if i + 1 < count {
            dst.push(',');
            newline(dst, indent, depth);
        }
    }
    newline(dst, indent, depth - 1);
    dst.push('}');
}

fn write_key(dst: &mut String, name: &str) {
    // Serializing a plain `str` never fails.
    match serde_json::to_string(name) {
        Ok(quoted) => dst.push_str(&quoted),
        Err(_) => {
            dst.push('"');
            dst.push_str(name);
            dst.push('"');
        }
    }
}

fn newline(dst: &mut String, indent: &str, depth: usize) {
    if indent.is_empty() {
        return;
    }
    dst.push('\n');
    for _ in 0..depth {
        dst.push_str(indent);
    }
}
