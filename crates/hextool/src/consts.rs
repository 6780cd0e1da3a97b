pub const VERSION: &str = "v0.1.0";

#[cfg(debug_assertions)]
pub const CONFIGFILE_PATH: &str = "hextool.conf";

#[cfg(not(debug_assertions))]
pub const CONFIGFILE_PATH: &str = "/etc/hextool.conf";
