use std::collections::HashMap;

/// A source of named configuration values.
///
/// Blank values are treated the same as missing ones by [`crate::AtomPaths`],
/// so implementations can return whatever they hold.
pub trait ConfigSource {
  /// Look up a value by name.
  fn var(&self, name: &str) -> Option<String>;
}

/// Reads values from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
  fn var(&self, name: &str) -> Option<String> {
    std::env::var(name).ok()
  }
}

impl ConfigSource for HashMap<String, String> {
  fn var(&self, name: &str) -> Option<String> {
    self.get(name).cloned()
  }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
  fn var(&self, name: &str) -> Option<String> {
    (**self).var(name)
  }
}

/// Layered lookup: the first source wins, the second fills the gaps.
impl<A: ConfigSource, B: ConfigSource> ConfigSource for (A, B) {
  fn var(&self, name: &str) -> Option<String> {
    self
      .0
      .var(name)
      .filter(|v| !v.trim().is_empty())
      .or_else(|| self.1.var(name))
  }
}
