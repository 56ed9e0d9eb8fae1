use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;
use crate::source::{ConfigSource, EnvSource};

/// Variable holding the data directory.
pub const DATA_DIR_ENV: &str = "bk_data_dir";
/// Variable holding the parameter file name.
pub const INPUT_FILE_ENV: &str = "bk_data_input";
/// Variable holding the result file name.
pub const OUTPUT_FILE_ENV: &str = "bk_data_output";

pub const DEFAULT_INPUT_FILE: &str = "input.json";
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

/// Resolved file locations for one atom invocation.
///
/// Resolved once and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomPaths {
  data_dir: PathBuf,
  input_file: String,
  output_file: String,
}

impl AtomPaths {
  /// Build paths from explicit values.
  pub fn new(
    data_dir: impl Into<PathBuf>,
    input_file: impl Into<String>,
    output_file: impl Into<String>,
  ) -> Self {
    Self {
      data_dir: data_dir.into(),
      input_file: input_file.into(),
      output_file: output_file.into(),
    }
  }

  /// Resolve paths from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::resolve(&EnvSource)
  }

  /// Resolve paths from any configuration source.
  ///
  /// The data directory is required. File names fall back to their defaults
  /// when unset or blank. Non-blank values are used exactly as given.
  pub fn resolve(source: &impl ConfigSource) -> Result<Self, ConfigError> {
    let data_dir = non_blank(source, DATA_DIR_ENV).ok_or_else(|| ConfigError::MissingVar {
      name: DATA_DIR_ENV.to_string(),
    })?;
    let input_file =
      non_blank(source, INPUT_FILE_ENV).unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string());
    let output_file =
      non_blank(source, OUTPUT_FILE_ENV).unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

    let paths = Self::new(data_dir, input_file, output_file);
    debug!(
      data_dir = %paths.data_dir.display(),
      input_file = %paths.input_file,
      output_file = %paths.output_file,
      "resolved atom paths"
    );
    Ok(paths)
  }

  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  pub fn input_file(&self) -> &str {
    &self.input_file
  }

  pub fn output_file(&self) -> &str {
    &self.output_file
  }

  /// Full path of the parameter file: `data_dir/input_file`.
  pub fn input_path(&self) -> PathBuf {
    self.data_dir.join(&self.input_file)
  }

  /// Full path of the result file: `data_dir/output_file`.
  pub fn output_path(&self) -> PathBuf {
    self.data_dir.join(&self.output_file)
  }
}

fn non_blank(source: &impl ConfigSource, name: &str) -> Option<String> {
  source
    .var(name)
    .filter(|v| !v.trim().is_empty())
}
