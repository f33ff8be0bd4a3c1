//! Disposable probe file the engine is queried about

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An empty file named after an extension, removed when the guard goes away
///
/// Call [`ProbeFile::remove`] on the success path to surface delete errors;
/// every other exit path cleans up in `Drop`.
#[derive(Debug)]
pub struct ProbeFile {
    path: PathBuf,
    armed: bool,
}

impl ProbeFile {
    /// Deterministic probe file name for an extension
    pub fn file_name(extension: &str) -> String {
        format!(".__sample-file.{extension}")
    }

    /// Creates the probe file for `extension` inside `dir`
    pub fn create(dir: &Path, extension: &str) -> io::Result<Self> {
        let path = dir.join(Self::file_name(extension));
        fs::write(&path, "")?;
        log::debug!("Created probe file {}", path.display());
        Ok(Self { path, armed: true })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the probe file, reporting failure
    pub fn remove(mut self) -> io::Result<()> {
        self.armed = false;
        fs::remove_file(&self.path)?;
        log::debug!("Removed probe file {}", self.path.display());
        Ok(())
    }
}

impl Drop for ProbeFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            log::warn!("Failed to remove probe file {}: {}", self.path.display(), e);
        }
    }
}
