use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use atom_config::{AtomPaths, DATA_DIR_ENV, EnvSource, INPUT_FILE_ENV, OUTPUT_FILE_ENV};
use atom_context::{AtomBaseParam, AtomContext, run_atom};

mod echo;

use echo::EchoAtom;

/// Atom - run and inspect pipeline atoms against a data directory
#[derive(Parser)]
#[command(name = "atom")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Data directory (overrides bk_data_dir)
  #[arg(long, global = true)]
  data_dir: Option<PathBuf>,

  /// Parameter file name inside the data directory (overrides bk_data_input)
  #[arg(long, global = true)]
  input: Option<String>,

  /// Result file name inside the data directory (overrides bk_data_output)
  #[arg(long, global = true)]
  output: Option<String>,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the resolved data directory, input and output paths
  Paths,

  /// Load the parameter file and print its pipeline metadata
  Check,

  /// Run the bundled echo atom
  Echo,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  init_logging(cli.verbose);

  match run(cli) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(e) => {
      eprintln!("error: {:#}", e);
      ExitCode::FAILURE
    }
  }
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("atom=debug,atom_config=debug,atom_context=debug")
  } else {
    EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("atom=info,atom_context=info"))
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .init();
}

/// Returns whether the command succeeded.
fn run(cli: Cli) -> Result<bool> {
  let overrides = cli_overrides(&cli);

  let Some(command) = cli.command else {
    println!("atom - use --help to see available commands");
    return Ok(true);
  };

  let paths =
    AtomPaths::resolve(&(overrides, EnvSource)).context("failed to resolve atom paths")?;

  match command {
    Commands::Paths => print_paths(&paths),
    Commands::Check => check_params(paths),
    Commands::Echo => {
      let status = run_atom(&EchoAtom, paths).context("echo atom failed")?;
      info!(status = ?status, "echo atom finished");
      Ok(status.is_success())
    }
  }
}

fn cli_overrides(cli: &Cli) -> HashMap<String, String> {
  let mut overrides = HashMap::new();
  if let Some(dir) = &cli.data_dir {
    overrides.insert(DATA_DIR_ENV.to_string(), dir.display().to_string());
  }
  if let Some(input) = &cli.input {
    overrides.insert(INPUT_FILE_ENV.to_string(), input.clone());
  }
  if let Some(output) = &cli.output {
    overrides.insert(OUTPUT_FILE_ENV.to_string(), output.clone());
  }
  overrides
}

fn print_paths(paths: &AtomPaths) -> Result<bool> {
  let output = json!({
    "dataDir": paths.data_dir().display().to_string(),
    "input": paths.input_path().display().to_string(),
    "output": paths.output_path().display().to_string(),
  });
  println!("{}", serde_json::to_string_pretty(&output)?);
  Ok(true)
}

fn check_params(paths: AtomPaths) -> Result<bool> {
  let ctx = AtomContext::<AtomBaseParam>::load(paths).context("failed to load parameters")?;
  let param = ctx.param();

  let sensitive: Vec<&str> = param
    .bk_sensitive_conf_info
    .as_ref()
    .map(|info| info.names())
    .unwrap_or_default();

  let mut metadata = serde_json::to_value(param)?;
  if let Some(fields) = metadata.as_object_mut() {
    fields.remove("bkSensitiveConfInfo");
  }

  let output = json!({
    "input": ctx.paths().input_path().display().to_string(),
    "pipeline": metadata,
    "sensitiveFields": sensitive,
  });
  println!("{}", serde_json::to_string_pretty(&output)?);
  Ok(true)
}
