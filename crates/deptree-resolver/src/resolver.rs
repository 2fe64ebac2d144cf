//! Resolver backed by a [`PackageIndex`].

use std::collections::HashMap;

use deptree_core::{Distribution, Distributions};
use deptree_util::errors::DeptreeError;

use crate::index::PackageIndex;
use crate::visited::VisitedSet;
use crate::Resolver;

/// Expands roots recursively using the dependency lists of a [`PackageIndex`].
#[derive(Debug, Clone, Default)]
pub struct IndexResolver {
    index: PackageIndex,
}

impl IndexResolver {
    pub fn new(index: PackageIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &PackageIndex {
        &self.index
    }
}

impl Resolver for IndexResolver {
    fn resolve(&self, names: &[String]) -> Result<Distributions, DeptreeError> {
        let mut session = Session {
            index: &self.index,
            visited: VisitedSet::new(),
            built: HashMap::new(),
        };

        let mut roots = Distributions::new();
        for name in names {
            let dis = session.build(name)?;
            if !roots.insert(dis) {
                tracing::debug!("Root {name} requested more than once");
            }
        }
        tracing::debug!(
            "Resolved {} root(s), {} distinct distribution(s)",
            roots.len(),
            session.built.len()
        );
        Ok(roots)
    }
}

/// State for a single `resolve` call.
struct Session<'a> {
    index: &'a PackageIndex,
    visited: VisitedSet,
    /// Subtrees already expanded in this session; cloned when reused.
    built: HashMap<String, Distribution>,
}

impl Session<'_> {
    fn build(&mut self, name: &str) -> Result<Distribution, DeptreeError> {
        if let Some(done) = self.built.get(name) {
            return Ok(done.clone());
        }

        let index = self.index;
        let deps = index
            .dependencies_of(name)
            .ok_or_else(|| DeptreeError::UnknownDistribution {
                name: name.to_string(),
            })?;

        if !self.visited.enter(name) {
            return Err(DeptreeError::DependencyCycle {
                chain: self.visited.cycle_through(name),
            });
        }

        let mut dis = Distribution::new(name);
        for dep in deps {
            let child = self.build(dep)?;
            dis.add_dependencies([child]);
        }
        self.visited.leave(name);

        tracing::debug!("Resolved {name} ({} direct deps)", dis.dependencies.len());
        self.built.insert(name.to_string(), dis.clone());
        Ok(dis)
    }
}
