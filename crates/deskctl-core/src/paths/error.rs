//! Path-related error types.
//!
//! Provides semantic errors for installation layout lookups without exposing
//! how the layout was discovered.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving the installation layout.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Could not determine where the running executable lives.
    #[error("Cannot determine current executable: {0}")]
    CurrentExe(String),

    /// A path has fewer ancestors than the layout requires.
    #[error("{path} has no ancestor {levels} levels up")]
    NoAncestor { path: PathBuf, levels: usize },

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory does not exist.
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// None of the candidate locations holds an executable.
    #[error("None of the candidate executables exist: {}", format_candidates(.candidates))]
    NoExecutable { candidates: Vec<PathBuf> },

    /// The component is not shipped on this platform.
    #[error("{0} is not installed on this platform")]
    Unsupported(&'static str),
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    if candidates.is_empty() {
        return "(no candidates)".to_string();
    }
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_executable_lists_every_candidate() {
        let err = PathError::NoExecutable {
            candidates: vec![PathBuf::from("/a/limactl"), PathBuf::from("/b/limactl")],
        };
        let msg = err.to_string();
        assert!(msg.contains("/a/limactl"));
        assert!(msg.contains("/b/limactl"));
    }
}
