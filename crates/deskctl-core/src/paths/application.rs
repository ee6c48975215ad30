//! Application installation directory and main executable.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::executable::find_first_executable;
use super::platform::{APP_DIR_ENV, ancestor, env_override, resources_dir};

/// Get the application installation directory.
///
/// Resolution order:
/// 1. `DESKCTL_APP_DIR` environment variable
/// 2. Derived from the resources directory
///
/// The directory must exist.
pub fn application_directory() -> Result<PathBuf, PathError> {
    let dir = match env_override(APP_DIR_ENV) {
        Some(dir) => dir,
        None => application_directory_from(&resources_dir()?)?,
    };
    ensure_directory_exists(&dir)?;
    Ok(dir)
}

/// Derive the installation directory from the resources directory.
///
/// - **macOS**: resources live at `Deskbox.app/Contents/Resources/resources`,
///   so the bundle is three levels up
/// - **Other**: resources live at `<app>/resources/resources`
pub fn application_directory_from(resources: &Path) -> Result<PathBuf, PathError> {
    if cfg!(target_os = "macos") {
        ancestor(resources, 3)
    } else {
        ancestor(resources, 2)
    }
}

/// Get the path to the main application executable.
pub fn main_executable() -> Result<PathBuf, PathError> {
    main_executable_in(&application_directory()?)
}

/// Locate the main executable inside an installation directory.
pub fn main_executable_in(app_dir: &Path) -> Result<PathBuf, PathError> {
    find_first_executable(main_executable_candidates(app_dir))
}

/// File name of the main executable on this platform.
pub const fn main_executable_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "Deskbox"
    } else if cfg!(target_os = "windows") {
        "Deskbox.exe"
    } else {
        "deskbox"
    }
}

fn main_executable_candidates(app_dir: &Path) -> Vec<PathBuf> {
    if cfg!(target_os = "macos") {
        vec![
            app_dir
                .join("Contents")
                .join("MacOS")
                .join(main_executable_name()),
        ]
    } else {
        vec![app_dir.join(main_executable_name())]
    }
}

fn ensure_directory_exists(dir: &Path) -> Result<(), PathError> {
    if !dir.exists() {
        return Err(PathError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(PathError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvOverride};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn application_directory_is_two_levels_above_resources() {
        let resources = Path::new("/opt/deskbox/resources/resources");
        assert_eq!(
            application_directory_from(resources).unwrap(),
            PathBuf::from("/opt/deskbox")
        );
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn application_directory_is_the_app_bundle() {
        let resources = Path::new("/Applications/Deskbox.app/Contents/Resources/resources");
        assert_eq!(
            application_directory_from(resources).unwrap(),
            PathBuf::from("/Applications/Deskbox.app")
        );
    }

    #[test]
    fn env_override_must_exist() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let _env = EnvOverride::set(APP_DIR_ENV, &missing);

        let err = application_directory().unwrap_err();
        assert!(matches!(err, PathError::DirectoryNotFound(p) if p == missing));
    }

    #[test]
    fn env_override_rejects_files() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("deskbox.txt");
        fs::write(&file, "not a dir").unwrap();
        let _env = EnvOverride::set(APP_DIR_ENV, &file);

        let err = application_directory().unwrap_err();
        assert!(matches!(err, PathError::NotADirectory(_)));
    }

    #[test]
    fn missing_main_executable_reports_candidates() {
        let dir = TempDir::new().unwrap();
        let err = main_executable_in(dir.path()).unwrap_err();
        match err {
            PathError::NoExecutable { candidates } => {
                assert_eq!(candidates.len(), 1);
                assert!(candidates[0].ends_with(main_executable_name()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
