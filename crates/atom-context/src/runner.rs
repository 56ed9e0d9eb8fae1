//! Lifecycle driver for atoms.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use atom_config::AtomPaths;
use atom_param::AtomParam;
use atom_result::{AtomError, ErrorType, Status};
use tracing::{error, info, instrument};

use crate::context::AtomContext;
use crate::error::ContextError;

/// Atom business logic.
pub trait TaskAtom<P: AtomParam> {
  /// Run the atom, reading parameters from and recording outputs into `ctx`.
  ///
  /// Returning an error marks the result failed with the error's details.
  fn execute(&self, ctx: &mut AtomContext<P>) -> Result<(), AtomError>;
}

/// Run an atom against paths resolved from the environment.
pub fn run_atom_from_env<P, A>(atom: &A) -> Result<Status, ContextError>
where
  P: AtomParam,
  A: TaskAtom<P> + ?Sized,
{
  run_atom(atom, AtomPaths::from_env()?)
}

/// Run an atom end to end and persist its result.
///
/// Parameter loading errors are returned before anything is executed, and no
/// result file is written in that case. Otherwise the result is always
/// persisted, whatever the atom did, and its final status is returned.
#[instrument(
  name = "atom_run",
  skip(atom, paths),
  fields(data_dir = %paths.data_dir().display())
)]
pub fn run_atom<P, A>(atom: &A, paths: AtomPaths) -> Result<Status, ContextError>
where
  P: AtomParam,
  A: TaskAtom<P> + ?Sized,
{
  let mut ctx = AtomContext::<P>::load(paths)?;

  info!("atom started");

  match panic::catch_unwind(AssertUnwindSafe(|| atom.execute(&mut ctx))) {
    Ok(Ok(())) => {
      info!(status = ?ctx.result().status, "atom completed");
    }
    Ok(Err(e)) => {
      error!(error = %e, error_code = ?e.error_code, "atom failed");
      ctx.result_mut().fail_with(&e);
    }
    Err(payload) => {
      let message = panic_message(payload.as_ref());
      error!(panic = %message, "atom panicked");

      let result = ctx.result_mut();
      result.status = Status::Error;
      result.message = format!("unknown error: {}", message);
      result.error_type = Some(ErrorType::Plugin);
      result.error_code = None;
      result.platform_code = None;
      result.platform_error_code = None;
    }
  }

  ctx.persist()?;
  Ok(ctx.result().status)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(s) = payload.downcast_ref::<&str>() {
    (*s).to_string()
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.clone()
  } else {
    "panic with non-string payload".to_string()
  }
}
