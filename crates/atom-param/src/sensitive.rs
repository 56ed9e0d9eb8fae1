use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sensitive configuration values substituted by the host, keyed by field name.
///
/// Values never appear in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensitiveConfInfo(HashMap<String, String>);

impl SensitiveConfInfo {
  pub fn new(values: HashMap<String, String>) -> Self {
    Self(values)
  }

  /// Look up a sensitive value by field name.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.0.get(name).map(String::as_str)
  }

  /// Field names with a sensitive value, sorted.
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl fmt::Debug for SensitiveConfInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map()
      .entries(self.names().into_iter().map(|name| (name, "***")))
      .finish()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SensitiveConfInfo {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self(
      iter
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    )
  }
}
