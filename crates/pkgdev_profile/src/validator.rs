//! Profile directory detection.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ProfileError, ProfileResult};
use crate::resources::PROFILE_META_FILE;

/// Check whether `path` is a profile directory.
///
/// Returns `Ok(false)` when the metadata marker is simply absent. Any other
/// failure to inspect the marker is returned as an error.
pub fn is_profile_dir(path: &Path) -> ProfileResult<bool> {
    let meta_path = path.join(PROFILE_META_FILE);
    match fs::metadata(&meta_path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ProfileError::io("error stat", meta_path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_marker_present() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(PROFILE_META_FILE), "{}").unwrap();
        assert!(is_profile_dir(temp.path()).unwrap());
    }

    #[test]
    fn test_marker_absent() {
        let temp = tempdir().unwrap();
        assert!(!is_profile_dir(temp.path()).unwrap());
        assert!(!is_profile_dir(&temp.path().join("missing")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_io_error_is_propagated() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain-file");
        fs::write(&file, "x").unwrap();

        // stat through a regular file fails with ENOTDIR, not NotFound
        let err = is_profile_dir(&file).unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
    }
}
