//! Ownership of the temporary download.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// RAII guard for the temporary download file.
///
/// The guard is taken before the download starts. On drop, unless the file
/// was persisted or removed explicitly, the file and any partial downloads
/// next to it are deleted. While the guard lives, the path is registered for
/// the same cleanup on Ctrl+C.
#[derive(Debug)]
pub struct TempDownload {
    path: PathBuf,
    armed: bool,
}

impl TempDownload {
    /// Take ownership of a download destination.
    pub fn track(path: PathBuf) -> Self {
        register_temp(&path);
        Self { path, armed: true }
    }

    /// Path of the temporary file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move the file to its final destination.
    ///
    /// On failure the download is left in place so it is not lost.
    pub fn persist(mut self, destination: &Path) -> Result<()> {
        self.armed = false;
        unregister_temp(&self.path);

        fs::rename(&self.path, destination).map_err(|e| Error::Rename {
            from: self.path.clone(),
            to: destination.to_path_buf(),
            source: e,
        })
    }

    /// Delete the file now, reporting failure to the caller.
    pub fn remove(mut self) -> Result<()> {
        self.armed = false;
        unregister_temp(&self.path);

        fs::remove_file(&self.path).map_err(|e| Error::Remove {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl Drop for TempDownload {
    fn drop(&mut self) {
        if self.armed {
            debug!("Discarding {}", self.path.display());
            discard(&self.path);
            unregister_temp(&self.path);
        }
    }
}

/// Global registry of live temporary downloads for cleanup on signal.
static ACTIVE_TEMP_FILES: std::sync::LazyLock<std::sync::Mutex<Vec<PathBuf>>> =
    std::sync::LazyLock::new(|| std::sync::Mutex::new(Vec::new()));

fn register_temp(path: &Path) {
    if let Ok(mut files) = ACTIVE_TEMP_FILES.lock() {
        files.push(path.to_path_buf());
    }
}

fn unregister_temp(path: &Path) {
    if let Ok(mut files) = ACTIVE_TEMP_FILES.lock() {
        files.retain(|p| p != path);
    }
}

#[cfg(test)]
fn is_registered(path: &Path) -> bool {
    ACTIVE_TEMP_FILES
        .lock()
        .is_ok_and(|files| files.iter().any(|p| p == path))
}

/// Remove all registered temporary downloads. Called on signal.
pub fn cleanup_temp_downloads() {
    if let Ok(files) = ACTIVE_TEMP_FILES.lock() {
        for path in files.iter() {
            discard(path);
        }
    }
}

/// Delete `path` and its partial downloads: every sibling named
/// `<stem>.*`, such as `temp_download.mp4.part` or `temp_download.f137.webm`.
fn discard(path: &Path) {
    let _ = fs::remove_file(path);

    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return;
    };
    let prefix = format!("{stem}.");
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let is_partial = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(&prefix));
        if is_partial {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn downloaded(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"media").unwrap();
        path
    }

    #[test]
    fn test_drop_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = downloaded(&dir, "temp_download.mp4");

        drop(TempDownload::track(path.clone()));
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_before_download_finishes_removes_partials() {
        let dir = TempDir::new().unwrap();
        let part = downloaded(&dir, "temp_download.mp4.part");
        let fragment = downloaded(&dir, "temp_download.f137.webm");
        let unrelated = downloaded(&dir, "notes.txt");

        drop(TempDownload::track(dir.path().join("temp_download.mp4")));

        assert!(!part.exists());
        assert!(!fragment.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn test_registered_before_file_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("temp_download.mp3");

        let guard = TempDownload::track(path.clone());
        assert!(!path.exists());
        assert!(is_registered(&path));

        drop(guard);
        assert!(!is_registered(&path));
    }

    #[test]
    fn test_persist_renames() {
        let dir = TempDir::new().unwrap();
        let path = downloaded(&dir, "temp_download.mp4");
        let output = dir.path().join("out.mp4");

        TempDownload::track(path.clone()).persist(&output).unwrap();
        assert!(!path.exists());
        assert_eq!(fs::read(&output).unwrap(), b"media");
    }

    #[test]
    fn test_failed_persist_keeps_download() {
        let dir = TempDir::new().unwrap();
        let path = downloaded(&dir, "temp_download.mp4");
        let output = dir.path().join("missing-dir").join("out.mp4");

        let err = TempDownload::track(path.clone()).persist(&output).unwrap_err();
        assert!(matches!(err, Error::Rename { .. }));
        assert!(path.exists());
    }

    #[test]
    fn test_remove_missing_file_reports_error() {
        let dir = TempDir::new().unwrap();
        let guard = TempDownload::track(dir.path().join("temp_download.mp3"));
        assert!(matches!(guard.remove(), Err(Error::Remove { .. })));
    }

    #[test]
    fn test_registration_follows_guard() {
        let dir = TempDir::new().unwrap();
        let path = downloaded(&dir, "temp_download.mp3");
        let output = dir.path().join("out.mp3");

        let guard = TempDownload::track(path.clone());
        assert!(is_registered(&path));

        guard.persist(&output).unwrap();
        assert!(!is_registered(&path));
    }
}
