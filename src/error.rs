//! Error type shared by configuration loading and filesystem-backed resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading configuration or probing the public directory.
///
/// Missing asset files are never reported here; they are skipped silently.
#[derive(Debug, Error)]
pub enum SmartAssetsError {
  /// Filesystem access failed for a reason other than the path being absent.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The JSON configuration file could not be parsed.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    #[source]
    source: serde_json::Error,
  },
}

impl SmartAssetsError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SmartAssetsError>;
