//! Promptpath - project-aware directory labels for shell prompts
//!
//! Usage:
//!   promptpath                  # Print the label for the current directory
//!   promptpath --format zsh     # Same, with zsh prompt escapes around colors
//!   promptpath check            # Validate the config and list projects
//!
//! The shell hook falls back to `$PWD` whenever this exits non-zero, so
//! every failure leaves stdout empty.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use promptpath_core::config::CONFIG_PATH_ENV;
use promptpath_core::context::AppContext;
use promptpath_core::error::CwdUnavailableError;
use promptpath_core::fs::normalize_path;
use promptpath_core::render::{AnsiRenderer, LabelRenderer, PlainRenderer};
use promptpath_core::resolve::{self, Resolver};
use promptpath_core::types::ProjectTable;

const LOG_ENV: &str = "PROMPTPATH_LOG";

#[derive(Parser)]
#[command(name = "promptpath")]
#[command(about = "Short, project-aware directory labels for shell prompts", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/promptpath/config.toml)
    #[arg(long, global = true, env = CONFIG_PATH_ENV, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Resolve DIR instead of the process's current directory
    ///
    /// Useful for passing `$PWD`, which keeps symlinked paths intact.
    #[arg(long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "ansi")]
    format: OutputFormat,

    /// Never emit color (also honored via NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// On a config error, print the raw directory and exit 0
    #[arg(long)]
    fallback_on_error: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the config file and list the configured projects
    Check,
}

#[derive(Clone, Copy, ValueEnum, Default, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Label and path only
    Plain,
    /// Raw ANSI color sequences
    #[default]
    Ansi,
    /// ANSI wrapped in zsh %{ %} markers
    Zsh,
    /// ANSI wrapped in readline \001 \002 markers
    Bash,
}

impl OutputFormat {
    fn renderer(self) -> Box<dyn LabelRenderer> {
        match self {
            OutputFormat::Plain => Box::new(PlainRenderer),
            OutputFormat::Ansi => Box::new(AnsiRenderer::new()),
            OutputFormat::Zsh => Box::new(AnsiRenderer::zsh()),
            OutputFormat::Bash => Box::new(AnsiRenderer::bash()),
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing; stdout carries the prompt text, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("promptpath: {err:#}");
            exit_code_for(&err)
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<CwdUnavailableError>().is_some() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::from_env(cli.config.clone())?;
    tracing::debug!(config = %ctx.config_path().display(), "resolved config path");

    match cli.command {
        Some(Commands::Check) => run_check(&ctx),
        None => run_render(&cli, &ctx),
    }
}

fn run_render(cli: &Cli, ctx: &AppContext) -> Result<()> {
    let dir = target_dir(cli.path.as_deref())?;

    let table = match ctx.config_store().load() {
        Ok(table) => table,
        Err(err) if cli.fallback_on_error => {
            eprintln!("promptpath: {:#}", anyhow::Error::from(err));
            println!("{}", dir.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let resolver = Resolver::new(&table, ctx.home_dir());
    let display = resolver.resolve(&dir);

    let format = if cli.no_color || no_color_env() {
        OutputFormat::Plain
    } else {
        cli.format
    };
    println!("{}", format.renderer().render(&display));
    Ok(())
}

/// Directory to resolve: `--path` (anchored at the cwd when relative) or the cwd.
fn target_dir(path: Option<&Path>) -> Result<PathBuf, CwdUnavailableError> {
    match path {
        Some(path) if path.is_absolute() => Ok(normalize_path(path)),
        Some(path) => Ok(normalize_path(&resolve::current_dir()?.join(path))),
        None => resolve::current_dir(),
    }
}

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

fn run_check(ctx: &AppContext) -> Result<()> {
    let config_path = ctx.config_path();
    let exists = config_path.exists();
    let table: ProjectTable = ctx
        .config_store()
        .load()
        .with_context(|| format!("Config check failed for {}", config_path.display()))?;

    if exists {
        println!("Config: {}", config_path.display());
    } else {
        println!("Config: {} (not found, using defaults)", config_path.display());
    }

    if let Some(code_root) = table.code_root() {
        println!("Code root: {}", code_root.display());
    }

    if table.is_empty() {
        println!("No projects configured.");
        return Ok(());
    }

    println!("Projects ({}):", table.len());
    let width = table
        .entries()
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    for entry in table.entries() {
        let color = entry
            .color
            .map(|color| format!("  [{color}]"))
            .unwrap_or_default();
        println!(
            "  {:width$}  {}{}",
            entry.name,
            entry.root_path.display(),
            color,
            width = width
        );
    }

    Ok(())
}
