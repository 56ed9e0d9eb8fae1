use thiserror::Error;

/// Errors that can occur while resolving atom paths.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// A required variable is unset or blank.
  #[error("missing required configuration: {name}")]
  MissingVar { name: String },
}
