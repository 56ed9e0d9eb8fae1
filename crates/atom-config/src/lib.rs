//! Atom Config
//!
//! Resolves where an atom invocation reads its parameters and writes its result.
//! The host hands these over as three values:
//!
//! - `bk_data_dir` - the data directory (required)
//! - `bk_data_input` - the parameter file name inside it (default `input.json`)
//! - `bk_data_output` - the result file name inside it (default `output.json`)
//!
//! Values come from a [`ConfigSource`]. The process environment is the usual
//! source, but maps and layered sources work the same way, which keeps tests and
//! command-line overrides away from global state.

mod error;
mod paths;
mod source;

pub use error::ConfigError;
pub use paths::{
  AtomPaths, DATA_DIR_ENV, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, INPUT_FILE_ENV, OUTPUT_FILE_ENV,
};
pub use source::{ConfigSource, EnvSource};
