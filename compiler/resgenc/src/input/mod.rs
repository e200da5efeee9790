//! Source discovery and loading.
//!
//! Directories are searched recursively for `.cs` files. Generated
//! `.g.cs` files, hidden entries and build output directories are skipped,
//! so running over a tree that already holds generated code is stable.

use std::fs;
use std::path::{Path, PathBuf};

use crate::DriverError;

/// A C# source file read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path as shown in diagnostics.
    pub display: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        SourceFile {
            display: path.display().to_string(),
            path,
            text: text.into(),
        }
    }

    pub fn read(path: &Path) -> Result<Self, DriverError> {
        let text = fs::read_to_string(path).map_err(|e| DriverError::reading(path, e))?;
        Ok(SourceFile::new(path, text))
    }
}

fn is_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".cs") && !name.ends_with(".g.cs")
}

/// Every source file under `inputs`, in argument order; files found in a
/// directory are sorted by path. Explicit file arguments are taken as-is.
pub fn discover(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, DriverError> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            discover_recursive(input, &mut found);
            found.sort();
            files.extend(found);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(DriverError::NotFound {
                path: input.clone(),
            });
        }
    }

    let mut seen = rustc_hash::FxHashSet::default();
    files.retain(|path| seen.insert(path.clone()));
    Ok(files)
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "cannot read directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if name.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            if matches!(name, "bin" | "obj" | "target" | "node_modules") {
                continue;
            }
            discover_recursive(&path, files);
        } else if is_source(&path) {
            files.push(path);
        }
    }
}

/// Discover and read every source file under `inputs`.
#[tracing::instrument(level = "debug", skip_all, fields(inputs = inputs.len()))]
pub fn load(inputs: &[PathBuf]) -> Result<Vec<SourceFile>, DriverError> {
    let paths = discover(inputs)?;
    if paths.is_empty() {
        return Err(DriverError::NoSources);
    }
    tracing::debug!(files = paths.len(), "discovered sources");
    paths.iter().map(|path| SourceFile::read(path)).collect()
}
