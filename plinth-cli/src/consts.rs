//! Constants for the plinth CLI
//!
//! Release metadata for the version this binary ships. The support windows
//! are `MM/YYYY` strings parsed at command start; a malformed value is a
//! fatal configuration error, not a recoverable condition.

/// Product name as shown in the about table
pub const PRODUCT_NAME: &str = "plinth";

/// Last month in which this release line receives bug fixes
pub const END_OF_MAINTENANCE: &str = "09/2027";

/// Last month in which this release line receives security fixes
pub const END_OF_LIFE: &str = "09/2029";

/// Whether this release line is a long-term-support release
pub const LONG_TERM_SUPPORT: bool = false;
