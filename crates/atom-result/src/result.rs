use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::DataField;
use crate::error::{AtomError, ErrorType};

/// Final state of an invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  #[default]
  Success,
  /// The atom reported a failure.
  Failure,
  /// The atom crashed.
  Error,
}

impl Status {
  pub fn is_success(self) -> bool {
    self == Status::Success
  }
}

/// Outcome of one atom invocation, as written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomResult {
  #[serde(default)]
  pub status: Status,
  #[serde(default = "default_message")]
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error_code: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error_type: Option<ErrorType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub platform_code: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub platform_error_code: Option<i32>,
  /// Result kind understood by the host.
  #[serde(rename = "type", default = "default_kind")]
  pub kind: String,
  /// Named outputs.
  #[serde(default)]
  pub data: BTreeMap<String, DataField>,
}

fn default_message() -> String {
  "success".to_string()
}

fn default_kind() -> String {
  "default".to_string()
}

impl Default for AtomResult {
  fn default() -> Self {
    Self {
      status: Status::Success,
      message: default_message(),
      error_code: None,
      error_type: None,
      platform_code: None,
      platform_error_code: None,
      kind: default_kind(),
      data: BTreeMap::new(),
    }
  }
}

impl AtomResult {
  pub fn success() -> Self {
    Self::default()
  }

  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      status: Status::Failure,
      message: message.into(),
      ..Self::default()
    }
  }

  /// Record an output, replacing any earlier value under the same name.
  pub fn set_output(&mut self, name: impl Into<String>, field: DataField) -> &mut Self {
    self.data.insert(name.into(), field);
    self
  }

  pub fn output(&self, name: &str) -> Option<&DataField> {
    self.data.get(name)
  }

  /// Mark the result failed with the details of `err`.
  pub fn fail_with(&mut self, err: &AtomError) {
    self.status = Status::Failure;
    self.message = err.message.clone();
    self.error_type = Some(err.error_type);
    self.error_code = err.error_code;
  }
}
