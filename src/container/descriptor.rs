//! Build descriptor lifecycle.
//!
//! The descriptor is written to the working directory only when the
//! image has to be built and no file with that name exists. If this run
//! created it, it is removed again when the process exits, whatever the
//! OCR outcome.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;

/// Path created by this run, if any. Consumed by [`cleanup`].
static CREATED: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Write the descriptor iff nothing exists at `path`. Returns whether
/// this call created the file. An existing file is never overwritten,
/// even when its content is stale.
pub fn materialize(path: &Path, content: &str) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, content)?;
    Ok(true)
}

/// Record `path` for removal at process exit.
pub fn register_cleanup(path: PathBuf) {
    *CREATED.lock().unwrap() = Some(path);
}

/// Remove the descriptor this run created, if any. Removal errors are
/// swallowed; the file may already be gone.
pub fn cleanup() {
    let Some(path) = CREATED.lock().unwrap().take() else {
        return;
    };
    if let Err(err) = fs::remove_file(&path) {
        if err.kind() != io::ErrorKind::NotFound {
            warn!("could not remove {}: {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn materialize_writes_the_exact_content_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Dockerfile");

        assert!(materialize(&path, crate::config::DOCKERFILE_CONTENT).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            crate::config::DOCKERFILE_CONTENT
        );
    }

    #[test]
    fn materialize_never_overwrites_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Dockerfile");
        fs::write(&path, "hand-edited descriptor").unwrap();

        assert!(!materialize(&path, "generated content").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand-edited descriptor");
    }

    #[test]
    fn cleanup_removes_the_registered_file_and_tolerates_reruns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Dockerfile");
        fs::write(&path, "x").unwrap();

        register_cleanup(path.clone());
        cleanup();
        assert!(!path.exists());

        // nothing registered anymore; must not panic
        cleanup();
    }
}
