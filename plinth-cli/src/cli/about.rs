//! # About Command
//!
//! Derive-based implementation of the about command for reporting runtime
//! and environment diagnostics.

use anyhow::Result;
use clap::Args;

use crate::about::run_about;

/// Command for showing runtime and environment diagnostics
#[derive(Args)]
pub struct AboutArgs {
  /// Exit with an error code if the release is past its maintenance window
  #[arg(long)]
  pub is_maintained: bool,

  /// Output format
  #[arg(long, short = 'f', value_name = "FORMAT", value_parser = ["text", "json"], default_value = "text")]
  pub format: String,
}

pub(crate) fn handle_about_command(about: AboutArgs) -> Result<()> {
  run_about(about.is_maintained, &about.format)
}
