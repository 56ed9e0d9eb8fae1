//! Atom Context
//!
//! The per-invocation handle an atom works through. An [`AtomContext`] loads
//! the parameter file once when it is built, owns the result the atom fills
//! in, and writes that result back out when [`AtomContext::persist`] is called.
//!
//! [`run_atom`] wraps the whole lifecycle for a [`TaskAtom`]: build the
//! context, execute, record failures into the result, persist.

mod context;
mod error;
mod runner;

pub use context::AtomContext;
pub use error::{ContextError, FileError};
pub use runner::{TaskAtom, run_atom, run_atom_from_env};

pub use atom_config::AtomPaths;
pub use atom_param::{AtomBaseParam, AtomParam, SensitiveConfInfo};
pub use atom_result::{AtomError, AtomResult, DataField, ErrorType, Status};
