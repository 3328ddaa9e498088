//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the plinth tool.

mod about;
mod completion;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use plinth_core::output::ColorMode;

/// Top-level CLI command for the plinth tool
#[derive(Parser)]
#[command(name = "plinth")]
#[command(about = "Runtime and environment diagnostics for your application installation")]
#[command(
  long_about = "Plinth reports on the application installation it is part of: the release\n\
        version and its support windows, the configured environment, and the host\n\
        runtime. Use it to check at a glance whether an installation is still\n\
        maintained and how it is configured."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the plinth tool
#[derive(Subcommand)]
pub enum Commands {
  /// Show runtime and environment diagnostics
  #[command(
    long_about = "Shows a table of runtime and environment diagnostics for this installation.\n\n\
            The table covers the application release (version and support windows), the\n\
            configured environment (environment name, debug flag, directory locations and\n\
            sizes), and the host runtime (build metadata, OS, locale, timezone).\n\n\
            With --is-maintained the command exits with status 1 if the release is past\n\
            its declared end of maintenance."
  )]
  About(about::AboutArgs),

  /// Generate shell completions
  #[command(long_about = "Generates shell completion scripts for plinth commands.\n\n\
            This command generates completion scripts that provide tab completion for plinth\n\
            commands and options in your shell. Supported shells include bash, zsh, and fish.")]
  Completion(completion::CompletionArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
      // Don't call set_override, allowing it to detect terminal automatically
    }
  }

  match cli.command {
    Commands::About(about) => about::handle_about_command(about),
    Commands::Completion(completion) => completion::handle_completion_command(completion),
  }
}
