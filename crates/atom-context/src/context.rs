//! Parameter loading and result persistence.

use std::fs;
use std::path::{Path, PathBuf};

use atom_config::{AtomPaths, ConfigSource, EnvSource};
use atom_param::AtomParam;
use atom_result::AtomResult;
use tracing::debug;

use crate::error::{ContextError, FileError};

/// Context for a single atom invocation.
///
/// Holds the parameters read from `data_dir/input_file` and the result that
/// will be written to `data_dir/output_file`. A context only exists once its
/// parameters have loaded successfully.
#[derive(Debug)]
pub struct AtomContext<T> {
  paths: AtomPaths,
  param: T,
  result: AtomResult,
}

impl<T: AtomParam> AtomContext<T> {
  /// Build a context from the paths the host put in the environment.
  pub fn new() -> Result<Self, ContextError> {
    Self::from_source(&EnvSource)
  }

  /// Build a context from paths resolved out of `source`.
  pub fn from_source(source: &impl ConfigSource) -> Result<Self, ContextError> {
    let paths = AtomPaths::resolve(source)?;
    Self::load(paths)
  }

  /// Build a context from already resolved paths.
  pub fn load(paths: AtomPaths) -> Result<Self, ContextError> {
    let input_path = paths.input_path();
    let param = read_param(&input_path).map_err(|source| ContextError::ParameterRead {
      path: input_path.clone(),
      source,
    })?;

    debug!(path = %input_path.display(), "loaded atom parameters");

    Ok(Self {
      paths,
      param,
      result: AtomResult::default(),
    })
  }

  /// Value of a sensitive field, if the host provided one.
  pub fn sensitive_conf_param(&self, name: &str) -> Option<&str> {
    self.param.sensitive_conf_info()?.get(name)
  }
}

impl<T> AtomContext<T> {
  /// The parameters loaded at construction.
  pub fn param(&self) -> &T {
    &self.param
  }

  pub fn result(&self) -> &AtomResult {
    &self.result
  }

  /// The result to fill in. There is exactly one per context.
  pub fn result_mut(&mut self) -> &mut AtomResult {
    &mut self.result
  }

  pub fn paths(&self) -> &AtomPaths {
    &self.paths
  }

  /// Write the current result to the output file.
  ///
  /// Missing parent directories are created and an existing file is
  /// overwritten, so calling this again simply rewrites the result.
  /// Returns the path written.
  pub fn persist(&self) -> Result<PathBuf, ContextError> {
    let output_path = self.paths.output_path();
    write_result(&output_path, &self.result).map_err(|source| ContextError::ResultWrite {
      path: output_path.clone(),
      source,
    })?;

    debug!(
      path = %output_path.display(),
      status = ?self.result.status,
      "persisted atom result"
    );
    Ok(output_path)
  }
}

fn read_param<T: AtomParam>(path: &Path) -> Result<T, FileError> {
  let content = fs::read_to_string(path)?;
  let json = content.strip_prefix('\u{feff}').unwrap_or(&content);
  Ok(serde_json::from_str(json)?)
}

fn write_result(path: &Path, result: &AtomResult) -> Result<(), FileError> {
  let json = serde_json::to_string(result)?;
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, json)?;
  Ok(())
}
