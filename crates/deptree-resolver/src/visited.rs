//! Tracks the chain of distributions currently being expanded so that a
//! dependency cycle is reported instead of recursing forever.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct VisitedSet {
    chain: Vec<String>,
    active: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `name` onto the active chain. Returns `false` if it is already on it.
    pub fn enter(&mut self, name: &str) -> bool {
        if !self.active.insert(name.to_string()) {
            return false;
        }
        self.chain.push(name.to_string());
        true
    }

    /// Pop `name` off the active chain.
    pub fn leave(&mut self, name: &str) {
        if self.active.remove(name) {
            if let Some(pos) = self.chain.iter().rposition(|n| n == name) {
                self.chain.remove(pos);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    /// Render the cycle that closes at `name`, e.g. `a -> b -> a`.
    pub fn cycle_through(&self, name: &str) -> String {
        let start = self.chain.iter().position(|n| n == name).unwrap_or(0);
        let mut parts: Vec<&str> = self.chain[start..].iter().map(String::as_str).collect();
        parts.push(name);
        parts.join(" -> ")
    }
}
