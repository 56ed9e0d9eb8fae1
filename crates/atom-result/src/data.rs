use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Where archived artifacts live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactoryType {
  /// The pipeline's own artifact repository.
  Pipeline,
  /// A user-chosen directory in the project repository.
  CustomDir,
}

/// How a report is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportType {
  /// Files archived from the build and served by the host.
  Internal,
  /// A link to an externally hosted report.
  Thirdparty,
}

/// A single named output of an atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataField {
  /// Plain string output, usable as a variable by later pipeline steps.
  String { value: String },

  /// Archived files.
  #[serde(rename_all = "camelCase")]
  Artifact {
    value: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    artifactory_type: Option<ArtifactoryType>,
  },

  /// A report shown on the build page.
  #[serde(rename_all = "camelCase")]
  Report {
    label: String,
    /// Directory holding the report files (internal reports).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    /// Entry file inside `path` (internal reports).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    /// External location (third-party reports).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    report_type: Option<ReportType>,
  },
}

impl DataField {
  pub fn string(value: impl Into<String>) -> Self {
    DataField::String {
      value: value.into(),
    }
  }

  pub fn artifact<I, S>(files: I, artifactory_type: ArtifactoryType) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    DataField::Artifact {
      value: files.into_iter().map(Into::into).collect(),
      artifactory_type: Some(artifactory_type),
    }
  }

  /// An internal report served from `path/target`.
  pub fn internal_report(
    label: impl Into<String>,
    path: impl Into<String>,
    target: impl Into<String>,
  ) -> Self {
    DataField::Report {
      label: label.into(),
      path: Some(path.into()),
      target: Some(target.into()),
      url: None,
      report_type: Some(ReportType::Internal),
    }
  }

  /// A report hosted elsewhere.
  pub fn third_party_report(label: impl Into<String>, url: impl Into<String>) -> Self {
    DataField::Report {
      label: label.into(),
      path: None,
      target: None,
      url: Some(url.into()),
      report_type: Some(ReportType::Thirdparty),
    }
  }
}
