//! # Configuration Directories
//!
//! Resolves the application's configuration, data, and cache directories
//! using the platform conventions (XDG base directories on Linux), and
//! provides the on-disk size helpers the about table reports them with.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Represents the configuration directories for the plinth application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: Option<PathBuf>,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "plinth").context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    let data_dir = proj_dirs.data_dir().to_path_buf();
    let cache_dir = Some(proj_dirs.cache_dir().to_path_buf());

    Ok(Self {
      config_dir,
      data_dir,
      cache_dir,
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the data directory
  pub fn data_dir(&self) -> &PathBuf {
    &self.data_dir
  }

  /// Get the cache directory
  pub fn cache_dir(&self) -> Option<&PathBuf> {
    self.cache_dir.as_ref()
  }

  /// Get the log directory, kept under the data directory
  pub fn logs_dir(&self) -> PathBuf {
    self.data_dir.join("logs")
  }
}

/// Recursive on-disk size of a directory, in bytes
///
/// Symlinks are counted at their own size rather than followed, so a cyclic
/// link cannot send the walk into a loop.
pub fn dir_size(path: &Path) -> Result<u64> {
  let mut total = 0;
  let entries = fs::read_dir(path).with_context(|| format!("Failed to read directory {}", path.display()))?;

  for entry in entries {
    let entry = entry.with_context(|| format!("Failed to read entry in {}", path.display()))?;
    let metadata = entry
      .metadata()
      .with_context(|| format!("Failed to read metadata for {}", entry.path().display()))?;

    if metadata.is_dir() {
      total += dir_size(&entry.path())?;
    } else {
      total += metadata.len();
    }
  }

  Ok(total)
}

/// Format a byte count with binary units for display
pub fn format_bytes(bytes: u64) -> String {
  const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

  if bytes < 1024 {
    return format!("{bytes} B");
  }

  let mut value = bytes as f64;
  let mut unit = 0;
  while value >= 1024.0 && unit < UNITS.len() - 1 {
    value /= 1024.0;
    unit += 1;
  }

  format!("{:.1} {}", value, UNITS[unit])
}
