//! Test utilities shared across the plinth workspace
//!
//! Provides environment isolation for tests that read configuration from
//! the process environment:
//! [`EnvTestGuard`] redirects the XDG base directories into a per-test
//! temporary directory, lets a test override further variables, and restores
//! everything on drop. Guards serialize on a process-wide lock so tests that
//! mutate the environment cannot race each other, even under the default
//! parallel test runner. A test must hold at most one guard at a time; extra
//! overrides chain through [`EnvTestGuard::set`] and [`EnvTestGuard::unset`].

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use std::{env, fs};

use tempfile::TempDir;

/// Process-wide lock serializing environment mutation across tests
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
  ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A test environment that overrides XDG directories to use a per-test
/// temporary directory
pub struct EnvTestGuard {
  /// The temporary directory backing the XDG directories
  pub temp_dir: TempDir,
  /// Saved (name, original value) pairs to restore on drop
  saved: Vec<(&'static str, Option<String>)>,
  _lock: MutexGuard<'static, ()>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  /// XDG environment variable names
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";
  pub const XDG_DATA_HOME: &'static str = "XDG_DATA_HOME";
  pub const XDG_CACHE_HOME: &'static str = "XDG_CACHE_HOME";

  /// Create a new test environment with overridden XDG directories
  pub fn new() -> Self {
    let lock = lock_env();
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let temp_path = temp_dir.path().to_path_buf();

    let mut guard = Self {
      temp_dir,
      saved: Vec::new(),
      _lock: lock,
    };

    guard.set_path(Self::XDG_CONFIG_HOME, temp_path.join("config"));
    guard.set_path(Self::XDG_DATA_HOME, temp_path.join("data"));
    guard.set_path(Self::XDG_CACHE_HOME, temp_path.join("cache"));

    fs::create_dir_all(temp_path.join("config")).expect("Failed to create config directory");
    fs::create_dir_all(temp_path.join("data")).expect("Failed to create data directory");
    fs::create_dir_all(temp_path.join("cache")).expect("Failed to create cache directory");

    guard
  }

  /// Override an additional environment variable for the test's lifetime
  pub fn set(mut self, name: &'static str, value: &str) -> Self {
    self.save(name);
    // SAFETY: all environment mutation in tests happens under ENV_LOCK
    unsafe {
      env::set_var(name, value);
    }
    self
  }

  /// Remove an environment variable for the test's lifetime
  pub fn unset(mut self, name: &'static str) -> Self {
    self.save(name);
    // SAFETY: all environment mutation in tests happens under ENV_LOCK
    unsafe {
      env::remove_var(name);
    }
    self
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// Get the path to the XDG data directory
  pub fn data_dir(&self) -> PathBuf {
    self.temp_dir.path().join("data")
  }

  /// Get the path to the XDG cache directory
  pub fn cache_dir(&self) -> PathBuf {
    self.temp_dir.path().join("cache")
  }

  fn save(&mut self, name: &'static str) {
    if !self.saved.iter().any(|(saved, _)| *saved == name) {
      self.saved.push((name, env::var(name).ok()));
    }
  }

  fn set_path(&mut self, name: &'static str, path: PathBuf) {
    self.save(name);
    // SAFETY: all environment mutation in tests happens under ENV_LOCK
    unsafe {
      env::set_var(name, path);
    }
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    for (name, original) in self.saved.drain(..) {
      match original {
        // SAFETY: all environment mutation in tests happens under ENV_LOCK
        Some(value) => unsafe {
          env::set_var(name, value);
        },
        // SAFETY: all environment mutation in tests happens under ENV_LOCK
        None => unsafe {
          env::remove_var(name);
        },
      }
    }
  }
}
