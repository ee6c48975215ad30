//! Executable lookup across candidate locations.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Return the first candidate that is an executable regular file.
///
/// Candidates are checked in order. On Unix a file must carry at least one
/// execute bit; elsewhere existence is enough.
pub fn find_first_executable<I, P>(candidates: I) -> Result<PathBuf, PathError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let candidates: Vec<PathBuf> = candidates.into_iter().map(Into::into).collect();

    let found = candidates
        .iter()
        .find(|candidate| is_executable(candidate))
        .cloned();
    found.ok_or(PathError::NoExecutable { candidates })
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}
