use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who is to blame for a failed invocation.
///
/// Serialized as the numeric code the host expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ErrorType {
  /// Bad input or configuration from the pipeline user.
  User,
  /// A third-party service the atom depends on.
  ThirdParty,
  /// A defect in the atom itself.
  Plugin,
}

impl ErrorType {
  pub fn code(self) -> u8 {
    match self {
      ErrorType::User => 1,
      ErrorType::ThirdParty => 2,
      ErrorType::Plugin => 3,
    }
  }
}

impl From<ErrorType> for u8 {
  fn from(value: ErrorType) -> Self {
    value.code()
  }
}

impl TryFrom<u8> for ErrorType {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(ErrorType::User),
      2 => Ok(ErrorType::ThirdParty),
      3 => Ok(ErrorType::Plugin),
      other => Err(format!("unknown error type: {}", other)),
    }
  }
}

impl fmt::Display for ErrorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      ErrorType::User => "user",
      ErrorType::ThirdParty => "third-party",
      ErrorType::Plugin => "plugin",
    };
    f.write_str(name)
  }
}

/// A failure raised by atom logic, recorded into the result by the runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error_type} error: {message}")]
pub struct AtomError {
  pub error_type: ErrorType,
  /// Atom-specific error code, if the atom defines one.
  pub error_code: Option<i32>,
  pub message: String,
}

impl AtomError {
  pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
    Self {
      error_type,
      error_code: None,
      message: message.into(),
    }
  }

  pub fn user(message: impl Into<String>) -> Self {
    Self::new(ErrorType::User, message)
  }

  pub fn third_party(message: impl Into<String>) -> Self {
    Self::new(ErrorType::ThirdParty, message)
  }

  pub fn plugin(message: impl Into<String>) -> Self {
    Self::new(ErrorType::Plugin, message)
  }

  pub fn with_code(mut self, code: i32) -> Self {
    self.error_code = Some(code);
    self
  }
}
