// Nibble table bound. Codes at or above this value are never hex digits.
pub const TABLE_LEN: usize = 255;

// Each decoded element takes exactly two hex digits
pub const DIGITS_PER_ELEMENT: usize = 2;

#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: &str = "debug";
#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Environment variable that overrides the log level given to setup_logging
pub const LOG_LEVEL_ENV: &str = "HEXBIN_LOG";
