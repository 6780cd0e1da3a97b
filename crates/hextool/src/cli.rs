use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
/// Validate, canonicalize and decode hexBinary literals.
pub struct Args {
    /// Configuration file. Defaults to hextool.conf (debug builds) or /etc/hextool.conf
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// Log level or filter, overrides the configuration file
    #[clap(short, long)]
    pub log_level: Option<String>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Report whether each literal is well formed hex, and its decoded length
    Check {
        #[clap(required = true)]
        hex: Vec<String>,
    },
    /// Print the canonical (uppercase) form of a literal
    Canon { hex: String },
    /// Print the decoded octets of a literal
    Decode {
        hex: String,
        /// Decode into 16 bit wide units instead of bytes
        #[clap(short, long)]
        wide: bool,
    },
    /// Validate a literal against the facets in the configuration file
    Validate { hex: String },
}
