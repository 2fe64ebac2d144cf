//! Core data types for deptree.
//!
//! This crate defines the dependency tree itself ([`Distribution`] and
//! [`Distributions`]), the ordered insert that keeps every dependency list
//! sorted and free of duplicate names, the JSON-shaped serializer, a
//! box-drawing tree renderer, and the user configuration file.
//!
//! This crate is intentionally free of resolution logic and network I/O.

pub mod config;
pub mod distribution;
pub mod json;
pub mod render;

pub use distribution::{Distribution, Distributions};
