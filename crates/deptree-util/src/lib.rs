//! Shared utilities for deptree.
//!
//! This crate provides cross-cutting concerns used by all other deptree crates:
//! the unified error type, filesystem helpers, and terminal status output.

pub mod errors;
pub mod fs;
pub mod status;
