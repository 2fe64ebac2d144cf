//! The distribution tree: nodes and sorted dependency lists.

use std::fmt;

/// A single distribution and the dependencies it pulls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub name: String,
    pub dependencies: Distributions,
}

impl Distribution {
    /// Create a leaf distribution with no dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Distributions::new(),
        }
    }

    /// Attach dependencies, keeping the list sorted by name.
    ///
    /// A dependency whose name is already present is dropped, even when its
    /// own subtree differs from the one already attached.
    pub fn add_dependencies<I>(&mut self, distributions: I)
    where
        I: IntoIterator<Item = Distribution>,
    {
        for dis in distributions {
            self.dependencies.insert(dis);
        }
    }

    /// Builder-style variant of [`Distribution::add_dependencies`].
    pub fn with_dependencies<I>(mut self, distributions: I) -> Self
    where
        I: IntoIterator<Item = Distribution>,
    {
        self.add_dependencies(distributions);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An ordered collection of distributions.
///
/// Used both for the roots of a resolved tree and for the dependency list of
/// each node. Entries are always sorted ascending by name and names are
/// unique; the only way to add an entry is [`Distributions::insert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distributions(Vec<Distribution>);

impl Distributions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `dis` at its sorted position.
    ///
    /// Returns `false` (and drops `dis`) if an entry with the same name is
    /// already present.
    pub fn insert(&mut self, dis: Distribution) -> bool {
        let i = self.0.partition_point(|d| d.name < dis.name);
        if let Some(existing) = self.0.get(i) {
            if existing.name == dis.name {
                tracing::trace!("Skipping duplicate distribution {}", dis.name);
                return false;
            }
        }
        self.0.insert(i, dis);
        true
    }

    /// Look up a distribution by name.
    pub fn get(&self, name: &str) -> Option<&Distribution> {
        self.0
            .binary_search_by(|d| d.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.0[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Distribution> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Distribution] {
        &self.0
    }

    /// Names of the entries at this level, in order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|d| d.name.as_str()).collect()
    }
}

impl Extend<Distribution> for Distributions {
    fn extend<I: IntoIterator<Item = Distribution>>(&mut self, iter: I) {
        for dis in iter {
            self.insert(dis);
        }
    }
}

impl FromIterator<Distribution> for Distributions {
    fn from_iter<I: IntoIterator<Item = Distribution>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl IntoIterator for Distributions {
    type Item = Distribution;
    type IntoIter = std::vec::IntoIter<Distribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Distributions {
    type Item = &'a Distribution;
    type IntoIter = std::slice::Iter<'a, Distribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
