//! Atom Param
//!
//! Parameter types handed to an atom by the pipeline host.
//!
//! Every atom declares its own parameter struct. The host fills it with the
//! atom's configured inputs plus a common block of pipeline metadata, which
//! lives in [`AtomBaseParam`]. Plugin structs embed that block with
//! `#[serde(flatten)]` and implement [`AtomParam`] so the context can reach the
//! sensitive configuration overrides.
//!
//! ```
//! use atom_param::{AtomBaseParam, AtomParam, SensitiveConfInfo};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct DeployParam {
//!   #[serde(flatten)]
//!   base: AtomBaseParam,
//!   target: String,
//! }
//!
//! impl AtomParam for DeployParam {
//!   fn sensitive_conf_info(&self) -> Option<&SensitiveConfInfo> {
//!     self.base.sensitive_conf_info()
//!   }
//! }
//! ```

mod base;
mod sensitive;

pub use base::AtomBaseParam;
pub use sensitive::SensitiveConfInfo;

use serde::de::DeserializeOwned;

/// A parameter shape an atom context can load.
pub trait AtomParam: DeserializeOwned {
  /// Host-injected sensitive overrides, keyed by field name.
  fn sensitive_conf_info(&self) -> Option<&SensitiveConfInfo> {
    None
  }
}
