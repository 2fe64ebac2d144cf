//! Offline package index: which distributions exist and what each depends on.
//!
//! ```toml
//! [packages.app]
//! dependencies = ["libfoo", "zlib"]
//!
//! [packages.zlib]
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use deptree_util::errors::DeptreeError;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

/// Default file name looked up when no index path is given.
pub const INDEX_FILE_NAME: &str = "Deptree.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageIndex {
    #[serde(default)]
    pub packages: BTreeMap<String, PackageEntry>,
}

/// A single `[packages.<name>]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageEntry {
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A dependency edge that points at a package the index does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDependency {
    pub package: String,
    pub dependency: String,
}

impl PackageIndex {
    /// Load and parse an index file from the given path.
    pub fn from_path(path: &Path) -> Result<Self, DeptreeError> {
        let content = std::fs::read_to_string(path).map_err(|e| DeptreeError::Index {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DeptreeError> {
        toml::from_str(content).map_err(|e| DeptreeError::Index {
            message: format!("Failed to parse index: {e}"),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Declared dependencies of `name`, or `None` if the package is unknown.
    pub fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.packages.get(name).map(|p| p.dependencies.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Dependency edges whose target has no `[packages.<name>]` table.
    pub fn missing_dependencies(&self) -> Vec<MissingDependency> {
        let mut missing = Vec::new();
        for (name, entry) in &self.packages {
            for dep in &entry.dependencies {
                if !self.contains(dep) {
                    missing.push(MissingDependency {
                        package: name.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
        }
        missing
    }

    /// Find a set of packages that depend on each other in a cycle.
    ///
    /// Returns the members of the cyclic component with the smallest name,
    /// sorted, or `None` if the index is acyclic.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut graph: DiGraph<&str, ()> = DiGraph::new();
        let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

        for name in self.packages.keys() {
            nodes.insert(name.as_str(), graph.add_node(name.as_str()));
        }
        for (name, entry) in &self.packages {
            let from = nodes[name.as_str()];
            for dep in &entry.dependencies {
                if let Some(&to) = nodes.get(dep.as_str()) {
                    graph.update_edge(from, to, ());
                }
            }
        }

        tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1 || graph.contains_edge(component[0], component[0])
            })
            .map(|component| {
                let mut members: Vec<String> =
                    component.iter().map(|&idx| graph[idx].to_string()).collect();
                members.sort();
                members
            })
            .min()
    }
}
