//! # Plinth Core Library
//!
//! Core library for the plinth diagnostics tool: the release support-window
//! model and expiry calculator, host environment snapshotting, configuration
//! directory resolution, and output formatting helpers. The CLI crate wires
//! these together into the `about` command.

pub mod config;
pub mod consts;
pub mod output;
pub mod release;
pub mod runtime;

// Re-export the main types for the CLI crate
pub use config::{ConfigDirs, dir_size, format_bytes};
pub use output::{ColorMode, display_or_na, print_error};
pub use release::{ParseSupportDateError, Release, SupportDate, is_leap_year};
pub use runtime::RuntimeSnapshot;
