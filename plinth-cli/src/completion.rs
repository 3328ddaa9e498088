//! # Shell Completion
//!
//! Generates shell completion scripts for various shells (bash, zsh, fish)
//! to provide tab completion for plinth commands and arguments.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, ValueEnum};
use clap_complete::generate;

use crate::cli::Cli;

/// Shell with an auto-generated completion script available.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
  /// Bourne Again `SHell` (bash)
  Bash,
  /// Friendly Interactive `SHell` (fish)
  Fish,
  /// Z `SHell` (zsh)
  Zsh,
}

impl From<Shell> for clap_complete::Shell {
  fn from(shell: Shell) -> Self {
    match shell {
      Shell::Bash => clap_complete::Shell::Bash,
      Shell::Fish => clap_complete::Shell::Fish,
      Shell::Zsh => clap_complete::Shell::Zsh,
    }
  }
}

/// Generate shell completions for the specified shell
pub fn generate_completions(shell: clap_complete::Shell) -> Result<()> {
  let mut cmd = Cli::command();
  let app_name = cmd.get_name().to_string();

  generate(shell, &mut cmd, app_name, &mut io::stdout());

  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::ValueEnum;

  use super::*;

  #[test]
  fn test_shell_value_enum_covers_supported_shells() {
    let names: Vec<String> = Shell::value_variants()
      .iter()
      .filter_map(|shell| shell.to_possible_value())
      .map(|value| value.get_name().to_string())
      .collect();

    assert_eq!(names, ["bash", "fish", "zsh"]);
  }

  #[test]
  fn test_generate_completions_succeeds() {
    // Test that generating completions for each shell doesn't panic
    for shell in Shell::value_variants() {
      let result = generate_completions((*shell).into());
      assert!(result.is_ok(), "Failed to generate completions for {:?}", shell);
    }
  }
}
