//! # Runtime Introspection
//!
//! Captures a point-in-time snapshot of the host environment: the configured
//! application environment and debug flag, the operating system and
//! architecture, and the host locale and timezone. Every probe degrades to a
//! default value rather than failing, so a partially configured host still
//! produces a complete about table.

use std::env;

use chrono::Local;

use crate::consts::{DEFAULT_ENVIRONMENT, ENV_PLINTH_DEBUG, ENV_PLINTH_ENV};

/// A point-in-time snapshot of the host environment
///
/// Read once per invocation; nothing here is refreshed after capture.
#[derive(Debug, Clone)]
pub struct RuntimeSnapshot {
  /// Application environment name (`PLINTH_ENV`, default `production`)
  pub environment: String,
  /// Debug flag (`PLINTH_DEBUG`, default false)
  pub debug: bool,
  /// Operating system the binary is running on
  pub os: String,
  /// CPU architecture the binary is running on
  pub arch: String,
  /// Host locale, if any of the POSIX locale variables is set
  pub locale: Option<String>,
  /// Host timezone, from `TZ` or the local UTC offset
  pub timezone: Option<String>,
}

impl RuntimeSnapshot {
  /// Capture the current host environment
  pub fn capture() -> Self {
    Self {
      environment: env::var(ENV_PLINTH_ENV)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
      debug: env::var(ENV_PLINTH_DEBUG)
        .map(|value| parse_flag(&value))
        .unwrap_or(false),
      os: env::consts::OS.to_string(),
      arch: env::consts::ARCH.to_string(),
      locale: detect_locale(),
      timezone: detect_timezone(),
    }
  }
}

/// Host locale from the usual POSIX variables, most specific first
fn detect_locale() -> Option<String> {
  ["LC_ALL", "LC_MESSAGES", "LANG"]
    .iter()
    .find_map(|name| env::var(name).ok().filter(|value| !value.is_empty()))
}

/// Timezone from `TZ`, falling back to the local UTC offset
fn detect_timezone() -> Option<String> {
  if let Ok(tz) = env::var("TZ") {
    if !tz.is_empty() {
      return Some(tz);
    }
  }
  Some(format!("UTC{}", Local::now().offset()))
}

/// Interpret a boolean-style environment flag
pub fn parse_flag(value: &str) -> bool {
  matches!(
    value.trim().to_ascii_lowercase().as_str(),
    "1" | "true" | "yes" | "on"
  )
}
