//! Integration tests for AtomContext against a scratch data directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use atom_config::ConfigError;
use atom_context::{
  AtomBaseParam, AtomContext, AtomParam, AtomPaths, AtomResult, ContextError, DataField, FileError,
  SensitiveConfInfo, Status,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct ValueParam {
  value: i64,
}

impl AtomParam for ValueParam {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildParam {
  #[serde(flatten)]
  base: AtomBaseParam,
  image: String,
  #[serde(default)]
  tags: Vec<String>,
}

impl AtomParam for BuildParam {
  fn sensitive_conf_info(&self) -> Option<&SensitiveConfInfo> {
    self.base.sensitive_conf_info()
  }
}

fn paths_in(dir: &Path) -> AtomPaths {
  AtomPaths::new(dir, "input.json", "output.json")
}

fn write_input(dir: &Path, value: serde_json::Value) {
  fs::write(dir.join("input.json"), value.to_string()).expect("failed to write input");
}

fn read_output(dir: &Path) -> serde_json::Value {
  let content = fs::read_to_string(dir.join("output.json")).expect("output should exist");
  serde_json::from_str(&content).expect("output should be valid JSON")
}

#[test]
fn test_load_typed_param() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"value": 42}));

  let ctx = AtomContext::<ValueParam>::load(paths_in(dir.path())).expect("context should load");

  assert_eq!(ctx.param(), &ValueParam { value: 42 });
  assert_eq!(ctx.param().value, 42);
}

#[test]
fn test_load_plugin_param_with_metadata() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(
    dir.path(),
    json!({
      "pipelineId": "p-1",
      "pipelineBuildId": "b-7",
      "image": "nginx:1.27",
      "tags": ["latest", "stable"]
    }),
  );

  let ctx = AtomContext::<BuildParam>::load(paths_in(dir.path())).expect("context should load");

  assert_eq!(ctx.param().image, "nginx:1.27");
  assert_eq!(ctx.param().tags, vec!["latest", "stable"]);
  assert_eq!(ctx.param().base.pipeline_id.as_deref(), Some("p-1"));
  assert_eq!(ctx.param().base.pipeline_build_id.as_deref(), Some("b-7"));
}

#[test]
fn test_sensitive_conf_param() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"bkSensitiveConfInfo": {"token": "abc"}}));

  let ctx = AtomContext::<AtomBaseParam>::load(paths_in(dir.path())).expect("context should load");

  assert_eq!(ctx.sensitive_conf_param("token"), Some("abc"));
  assert_eq!(ctx.sensitive_conf_param("missing"), None);
}

#[test]
fn test_sensitive_conf_param_without_mapping() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"image": "alpine", "bkSensitiveConfInfo": {}}));

  let ctx = AtomContext::<BuildParam>::load(paths_in(dir.path())).expect("context should load");
  assert_eq!(ctx.sensitive_conf_param("token"), None);

  write_input(dir.path(), json!({"value": 1}));
  let ctx = AtomContext::<ValueParam>::load(paths_in(dir.path())).expect("context should load");
  assert_eq!(ctx.sensitive_conf_param("token"), None);
}

#[test]
fn test_result_starts_as_default() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"value": 1}));

  let ctx = AtomContext::<ValueParam>::load(paths_in(dir.path())).expect("context should load");

  assert_eq!(ctx.result(), &AtomResult::default());
  assert_eq!(ctx.result().status, Status::Success);
}

#[test]
fn test_persist_mutated_result() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"value": 1}));

  let mut ctx =
    AtomContext::<ValueParam>::load(paths_in(dir.path())).expect("context should load");
  ctx.result_mut().status = Status::Success;
  ctx
    .result_mut()
    .set_output("artifact_version", DataField::string("1.0.3"));

  let written = ctx.persist().expect("persist should succeed");
  assert_eq!(written, dir.path().join("output.json"));

  let output = read_output(dir.path());
  assert_eq!(output["status"], "success");
  assert_eq!(output["data"]["artifact_version"]["value"], "1.0.3");

  let decoded: AtomResult = serde_json::from_value(output).expect("output should decode");
  assert_eq!(&decoded, ctx.result());
}

#[test]
fn test_persist_twice_overwrites() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"value": 1}));

  let mut ctx =
    AtomContext::<ValueParam>::load(paths_in(dir.path())).expect("context should load");
  ctx.persist().expect("first persist should succeed");

  ctx.result_mut().status = Status::Failure;
  ctx.result_mut().message = "second run".to_string();
  ctx.persist().expect("second persist should succeed");

  let output = read_output(dir.path());
  assert_eq!(output["status"], "failure");
  assert_eq!(output["message"], "second run");
}

#[test]
fn test_persist_creates_missing_output_dir() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"value": 1}));

  let paths = AtomPaths::new(dir.path(), "input.json", "results/output.json");
  let ctx = AtomContext::<ValueParam>::load(paths).expect("context should load");
  ctx.persist().expect("persist should succeed");

  assert!(dir.path().join("results/output.json").exists());
}

#[test]
fn test_missing_input_fails_without_writing_output() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");

  let err = AtomContext::<ValueParam>::load(paths_in(dir.path())).unwrap_err();

  match err {
    ContextError::ParameterRead { path, source } => {
      assert_eq!(path, dir.path().join("input.json"));
      assert!(matches!(source, FileError::Io(_)));
    }
    other => panic!("expected ParameterRead, got {:?}", other),
  }
  assert!(!dir.path().join("output.json").exists());
}

#[test]
fn test_malformed_input_fails() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  fs::write(dir.path().join("input.json"), "{\"value\": ").unwrap();

  let err = AtomContext::<ValueParam>::load(paths_in(dir.path())).unwrap_err();
  assert!(matches!(
    err,
    ContextError::ParameterRead {
      source: FileError::Json(_),
      ..
    }
  ));
}

#[test]
fn test_shape_mismatch_fails() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"value": "not a number"}));

  let err = AtomContext::<ValueParam>::load(paths_in(dir.path())).unwrap_err();
  assert!(matches!(
    err,
    ContextError::ParameterRead {
      source: FileError::Json(_),
      ..
    }
  ));
  assert!(err.to_string().contains("input.json"));
}

#[test]
fn test_persist_to_unwritable_path_fails() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"value": 1}));
  // A regular file where the output directory should be.
  fs::write(dir.path().join("blocked"), "").unwrap();

  let paths = AtomPaths::new(dir.path(), "input.json", "blocked/output.json");
  let ctx = AtomContext::<ValueParam>::load(paths).expect("context should load");

  let err = ctx.persist().unwrap_err();
  assert!(matches!(
    err,
    ContextError::ResultWrite {
      source: FileError::Io(_),
      ..
    }
  ));
}

#[test]
fn test_paths_resolved_from_source() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  fs::write(dir.path().join("params.json"), r#"{"value": 5}"#).unwrap();

  let source: HashMap<String, String> = [
    ("bk_data_dir", dir.path().to_str().unwrap()),
    ("bk_data_input", "params.json"),
    ("bk_data_output", "result.json"),
  ]
  .into_iter()
  .map(|(k, v)| (k.to_string(), v.to_string()))
  .collect();

  let paths = AtomPaths::resolve(&source).expect("paths should resolve");
  let ctx = AtomContext::<ValueParam>::load(paths).expect("context should load");
  assert_eq!(ctx.param().value, 5);

  ctx.persist().expect("persist should succeed");
  assert!(dir.path().join("result.json").exists());
}

#[test]
fn test_from_source_loads_context() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_input(dir.path(), json!({"value": 9}));

  let source: HashMap<String, String> = [(
    "bk_data_dir".to_string(),
    dir.path().to_str().unwrap().to_string(),
  )]
  .into_iter()
  .collect();

  let ctx = AtomContext::<ValueParam>::from_source(&source).expect("context should load");
  assert_eq!(ctx.param().value, 9);
  assert_eq!(ctx.paths().output_path(), dir.path().join("output.json"));
}

#[test]
fn test_from_source_without_data_dir_is_configuration_error() {
  let source: HashMap<String, String> = [("bk_data_input".to_string(), "in.json".to_string())]
    .into_iter()
    .collect();

  let err = AtomContext::<ValueParam>::from_source(&source).unwrap_err();
  assert!(matches!(
    err,
    ContextError::Configuration(ConfigError::MissingVar { ref name }) if name == "bk_data_dir"
  ));
}
