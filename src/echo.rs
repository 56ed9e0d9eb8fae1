//! Bundled echo atom.
//!
//! Reads a `message` from its parameters and reports it back as a string
//! output. Handy for checking that a host wires input and output files the way
//! the context expects.

use atom_context::{
  AtomBaseParam, AtomContext, AtomError, AtomParam, DataField, SensitiveConfInfo, TaskAtom,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EchoParam {
  #[serde(flatten)]
  pub base: AtomBaseParam,
  #[serde(default)]
  pub message: String,
  /// Upper-case the message before echoing it.
  #[serde(default)]
  pub upper: bool,
}

impl AtomParam for EchoParam {
  fn sensitive_conf_info(&self) -> Option<&SensitiveConfInfo> {
    self.base.sensitive_conf_info()
  }
}

pub struct EchoAtom;

impl TaskAtom<EchoParam> for EchoAtom {
  fn execute(&self, ctx: &mut AtomContext<EchoParam>) -> Result<(), AtomError> {
    let param = ctx.param();
    if param.message.trim().is_empty() {
      return Err(AtomError::user("message is required"));
    }

    let message = if param.upper {
      param.message.to_uppercase()
    } else {
      param.message.clone()
    };

    let result = ctx.result_mut();
    result.set_output("message", DataField::string(message));
    result.message = "echoed".to_string();
    Ok(())
  }
}
