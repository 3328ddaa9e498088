//! Constants for the plinth workspace
//!
//! Environment variable names and default values shared between the core
//! library and the CLI.

/// Environment variable selecting the application environment name
pub const ENV_PLINTH_ENV: &str = "PLINTH_ENV";

/// Environment variable enabling debug mode
pub const ENV_PLINTH_DEBUG: &str = "PLINTH_DEBUG";

/// Environment name assumed when `PLINTH_ENV` is unset
pub const DEFAULT_ENVIRONMENT: &str = "production";
