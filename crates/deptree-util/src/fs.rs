use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a file named `filename`.
/// Returns the full path to the first match, or `None`.
pub fn find_file_upwards(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            tracing::debug!("Found {} at {}", filename, candidate.display());
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

