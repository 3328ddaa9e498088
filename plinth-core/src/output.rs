//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for user-facing messages and terminal output.

use owo_colors::OwoColorize;
use {clap, emojis};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Display an optional probe result, degrading to `n/a` when absent
pub fn display_or_na(value: Option<&str>) -> String {
  value.map_or_else(|| "n/a".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    // Test with a known emoji
    let result = get_emoji_or_default("check_mark", "✓");
    assert!(!result.is_empty());

    // Test with unknown emoji
    let result = get_emoji_or_default("nonexistent_emoji", "fallback");
    assert_eq!(result, "fallback");
  }

  #[test]
  fn test_display_or_na() {
    assert_eq!(display_or_na(Some("en_US.UTF-8")), "en_US.UTF-8");
    assert_eq!(display_or_na(None), "n/a");
  }
}
