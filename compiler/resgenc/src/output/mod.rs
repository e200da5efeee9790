//! Destinations for generated sources.
//!
//! Sources may be added from several worker threads at once, so every
//! implementation guards its state with a lock.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::DriverError;

/// Receives generated sources, one per result type.
pub trait SourceOutput: Sync {
    /// Add the source text for `file_name` (`{TypeName}.g.cs`).
    fn add_source(&self, file_name: &str, content: &str) -> Result<(), DriverError>;
}

/// Writes `{dir}/{file_name}`, leaving files whose content is unchanged
/// untouched.
pub struct DirectoryOutput {
    dir: PathBuf,
    written: Mutex<Vec<String>>,
}

impl DirectoryOutput {
    /// Create `dir` if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, DriverError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| DriverError::writing(&dir, e))?;
        Ok(DirectoryOutput {
            dir,
            written: Mutex::new(Vec::new()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of the files whose content changed, sorted.
    pub fn written(&self) -> Vec<String> {
        let mut written = self.written.lock().clone();
        written.sort();
        written
    }
}

impl SourceOutput for DirectoryOutput {
    fn add_source(&self, file_name: &str, content: &str) -> Result<(), DriverError> {
        let path = self.dir.join(file_name);
        if fs::read_to_string(&path).is_ok_and(|existing| existing == content) {
            tracing::trace!(file = file_name, "unchanged");
            return Ok(());
        }
        fs::write(&path, content).map_err(|e| DriverError::writing(&path, e))?;
        tracing::debug!(path = %path.display(), "wrote");
        self.written.lock().push(file_name.to_string());
        Ok(())
    }
}

/// Compares sources against the files already in a directory, writing
/// nothing.
pub struct CheckOutput {
    dir: PathBuf,
    stale: Mutex<Vec<String>>,
}

impl CheckOutput {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CheckOutput {
            dir: dir.into(),
            stale: Mutex::new(Vec::new()),
        }
    }

    /// Files that are missing or differ from what would be generated,
    /// sorted.
    pub fn stale(&self) -> Vec<String> {
        let mut stale = self.stale.lock().clone();
        stale.sort();
        stale
    }
}

impl SourceOutput for CheckOutput {
    fn add_source(&self, file_name: &str, content: &str) -> Result<(), DriverError> {
        let path = self.dir.join(file_name);
        let up_to_date = match fs::read_to_string(&path) {
            Ok(existing) => existing == content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(DriverError::reading(&path, e)),
        };
        if !up_to_date {
            self.stale.lock().push(file_name.to_string());
        }
        Ok(())
    }
}

/// Keeps sources in memory.
#[derive(Default)]
pub struct MemoryOutput {
    sources: Mutex<Vec<(String, String)>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(file_name, content)` pairs sorted by file name.
    pub fn into_sources(self) -> Vec<(String, String)> {
        let mut sources = self.sources.into_inner();
        sources.sort_by(|a, b| a.0.cmp(&b.0));
        sources
    }
}

impl SourceOutput for MemoryOutput {
    fn add_source(&self, file_name: &str, content: &str) -> Result<(), DriverError> {
        self.sources
            .lock()
            .push((file_name.to_string(), content.to_string()));
        Ok(())
    }
}
