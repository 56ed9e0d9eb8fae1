use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::AtomParam;
use crate::sensitive::SensitiveConfInfo;

/// Pipeline metadata the host passes to every atom.
///
/// All fields are optional: hosts differ in what they fill in, and a missing
/// field must not stop the atom from loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomBaseParam {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pipeline_version: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_name: Option<String>,
  /// Display name of the project.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_name_cn: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pipeline_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pipeline_build_num: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pipeline_build_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pipeline_name: Option<String>,
  /// Build start time in epoch milliseconds, as sent by the host.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pipeline_start_time_mills: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pipeline_start_user_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pipeline_update_user_name: Option<String>,
  /// Workspace directory of the build.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bk_workspace: Option<String>,
  /// `"Y"` when the atom runs as a test version.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub test_version_flag: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bk_sensitive_conf_info: Option<SensitiveConfInfo>,
}

impl AtomBaseParam {
  /// The build workspace, if the host provided one.
  pub fn workspace(&self) -> Option<&Path> {
    self
      .bk_workspace
      .as_deref()
      .filter(|w| !w.is_empty())
      .map(Path::new)
  }

  pub fn is_test_version(&self) -> bool {
    self.test_version_flag.as_deref() == Some("Y")
  }
}

impl AtomParam for AtomBaseParam {
  fn sensitive_conf_info(&self) -> Option<&SensitiveConfInfo> {
    self.bk_sensitive_conf_info.as_ref()
  }
}
