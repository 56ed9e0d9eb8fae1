//! Atom Result
//!
//! The outcome an atom reports back to the pipeline host. An [`AtomResult`]
//! starts out as a success with no outputs; the atom mutates it while it runs
//! and the context serializes it to the output file at the end.
//!
//! Output values are [`DataField`]s, tagged by `type` on the wire so the host
//! can render strings, archived artifacts and reports differently.

mod data;
mod error;
mod result;

pub use data::{ArtifactoryType, DataField, ReportType};
pub use error::{AtomError, ErrorType};
pub use result::{AtomResult, Status};
