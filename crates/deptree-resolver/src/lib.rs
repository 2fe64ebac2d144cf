//! Dependency resolution for deptree.
//!
//! [`Resolver`] is the single capability the rest of the workspace relies on:
//! turn a list of root names into a populated [`Distributions`] tree. The
//! [`resolver::IndexResolver`] implementation reads dependency edges from a
//! TOML [`index::PackageIndex`].

pub mod index;
pub mod resolver;
pub mod visited;

use deptree_core::Distributions;
use deptree_util::errors::DeptreeError;

/// Builds a dependency tree for a set of root distributions.
pub trait Resolver {
    /// Returns the root distributions with their dependencies attached.
    fn resolve(&self, names: &[String]) -> Result<Distributions, DeptreeError>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, names: &[String]) -> Result<Distributions, DeptreeError> {
        (**self).resolve(names)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve(&self, names: &[String]) -> Result<Distributions, DeptreeError> {
        (**self).resolve(names)
    }
}
