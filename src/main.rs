use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bamboo_actions::{Action, ActionDefaults, BambooSession};
use bamboo_config::{AcliConfig, ConfigLayer};
use bamboo_task_registry::TaskRegistry;

/// bamboo-acli - drive Atlassian Bamboo through the acli command-line client
#[derive(Parser)]
#[command(name = "bamboo-acli")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the config file (default: ~/.bamboo-acli/config.json)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Directory containing the acli executable
  #[arg(long, global = true, env = "BAMBOO_ACLI_DIR")]
  install_dir: Option<PathBuf>,

  /// Server name from acli.properties
  #[arg(long, global = true, env = "BAMBOO_ACLI_SERVER")]
  server: Option<String>,

  /// Default project for project-scoped actions
  #[arg(long, global = true, env = "BAMBOO_ACLI_PROJECT")]
  project: Option<String>,

  /// Log at debug level unless RUST_LOG says otherwise
  #[arg(long, short, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run an action read as JSON from a file or stdin
  Send {
    /// Path to the action file (default: stdin)
    file: Option<PathBuf>,
  },

  /// Print the acli command for an action without running it
  Render {
    /// Path to the action file (default: stdin)
    file: Option<PathBuf>,
  },

  /// Run an already serialized acli command
  Raw {
    /// e.g. `--action getServerInfo`
    command: String,
  },

  /// Show the canonical key and parameters of a task type
  Task {
    /// Task key, any case
    identifier: String,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match &cli.command {
    Some(Commands::Send { file }) => {
      let session = session(&cli)?;
      let action = read_action(file.as_deref())?;
      let output = session
        .send(&action)
        .with_context(|| format!("{} failed", action.name()))?;
      write_stdout(&output.stdout)?;
    }
    Some(Commands::Render { file }) => {
      // Rendering needs no acli install, only the default project.
      let defaults = ActionDefaults {
        project: config_layer(&cli)?.project,
      };
      let action = read_action(file.as_deref())?;
      println!("{}", action.to_command(&defaults)?);
    }
    Some(Commands::Raw { command }) => {
      let output = session(&cli)?
        .send_raw(command)
        .context("acli command failed")?;
      write_stdout(&output.stdout)?;
    }
    Some(Commands::Task { identifier }) => {
      let registry = TaskRegistry::global();
      let key = registry.resolve(identifier)?;
      let shape = registry.shape(key)?;
      let output = serde_json::json!({ "key": key, "shape": shape });
      println!("{}", serde_json::to_string_pretty(&output)?);
    }
    None => {
      println!("bamboo-acli - use --help to see available commands");
    }
  }

  Ok(())
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .try_init();
}

/// Merge the config file with flags and environment variables.
fn config_layer(cli: &Cli) -> Result<ConfigLayer> {
  let overrides = ConfigLayer {
    install_dir: cli.install_dir.clone(),
    server: cli.server.clone(),
    project: cli.project.clone(),
    executable: None,
  };

  let path = match &cli.config {
    Some(path) => Some(path.clone()),
    None => dirs::home_dir().map(|home| home.join(".bamboo-acli").join("config.json")),
  };

  // An explicit --config must exist; the default one is optional.
  let file = match path {
    Some(path) if cli.config.is_some() || path.exists() => {
      debug!(path = %path.display(), "loading config");
      ConfigLayer::load(&path)?
    }
    _ => ConfigLayer::default(),
  };

  Ok(file.overlay(overrides))
}

fn session(cli: &Cli) -> Result<BambooSession> {
  let config =
    AcliConfig::try_from(config_layer(cli)?).context("incomplete acli configuration")?;
  Ok(BambooSession::from_config(&config))
}

fn read_action(file: Option<&Path>) -> Result<Action> {
  let input = match file {
    Some(path) => fs::read_to_string(path)
      .with_context(|| format!("failed to read action file: {}", path.display()))?,
    None => {
      let mut input = String::new();
      io::stdin()
        .read_to_string(&mut input)
        .context("failed to read action from stdin")?;
      input
    }
  };

  serde_json::from_str(&input).context("failed to parse action JSON")
}

fn write_stdout(bytes: &[u8]) -> Result<()> {
  let mut stdout = io::stdout().lock();
  stdout.write_all(bytes)?;
  stdout.flush()?;
  Ok(())
}
