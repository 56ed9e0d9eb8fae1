//! Context error types.

use std::path::PathBuf;

use atom_config::ConfigError;

/// Why a parameter or result file could not be handled.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid json: {0}")]
  Json(#[from] serde_json::Error),
}

/// Errors surfaced by the atom context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
  /// The data directory or file names could not be resolved.
  #[error("configuration error: {0}")]
  Configuration(#[from] ConfigError),

  /// The parameter file is missing, unreadable, or does not match the
  /// parameter shape.
  #[error("failed to read parameters from {}: {source}", path.display())]
  ParameterRead {
    path: PathBuf,
    #[source]
    source: FileError,
  },

  /// The result could not be written.
  #[error("failed to write result to {}: {source}", path.display())]
  ResultWrite {
    path: PathBuf,
    #[source]
    source: FileError,
  },
}
