//! File source abstraction for the check engine.
//!
//! The engine never touches the filesystem directly; it asks a `FileSource`
//! for the text of each path. This keeps the checks testable without real
//! files and gives a single point of control for I/O.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading an input file
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("file does not exist: {0}")]
    NotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// The path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound(path) | SourceError::NotAFile(path) => path,
            SourceError::Read { path, .. } => path,
        }
    }
}

/// Trait for providing file contents to the engine.
pub trait FileSource {
    /// Read the full text of `path`.
    ///
    /// Bytes that are not valid UTF-8 are content, not an error: they are
    /// decoded lossily so the rest of the file is still checked.
    fn read(&self, path: &Path) -> Result<String, SourceError>;
}

/// Real implementation reading from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFiles;

impl FileSource for DiskFiles {
    fn read(&self, path: &Path) -> Result<String, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(SourceError::NotAFile(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(decode_lossy(path, bytes))
    }
}

/// UTF-8 text of `bytes`, with invalid sequences replaced by U+FFFD
fn decode_lossy(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Base name of a path, as used in reports
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

// ---------------------------------------------------------------------------
// Test-only mock
// ---------------------------------------------------------------------------

#[cfg(test)]
pub struct MockFileSource {
    contents: std::collections::HashMap<PathBuf, String>,
}

#[cfg(test)]
impl MockFileSource {
    /// Build a mock from `(path, content)` pairs. Any other path is missing.
    pub fn new(entries: Vec<(&str, &str)>) -> Self {
        let contents = entries
            .into_iter()
            .map(|(path, body)| (PathBuf::from(path), body.to_string()))
            .collect();
        Self { contents }
    }
}

#[cfg(test)]
impl FileSource for MockFileSource {
    fn read(&self, path: &Path) -> Result<String, SourceError> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_path_buf()))
    }
}
