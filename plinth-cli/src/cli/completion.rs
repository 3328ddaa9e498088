//! # Completion Command
//!
//! Derive-based implementation of the completion command for generating
//! shell completion scripts.

use anyhow::Result;
use clap::Args;

use crate::completion::{Shell, generate_completions};

/// Command for generating shell completions
#[derive(Args)]
pub struct CompletionArgs {
  /// Shell to generate completions for
  #[arg(required = true, value_enum, ignore_case = true)]
  pub shell: Shell,
}

pub(crate) fn handle_completion_command(completion: CompletionArgs) -> Result<()> {
  generate_completions(completion.shell.into())
}
