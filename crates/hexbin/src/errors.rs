use std::fmt;

/// The only failure the codec reports.
/// Empty input, odd length and non hex characters all end up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MalformedHexInput;

impl std::error::Error for MalformedHexInput {}

impl fmt::Display for MalformedHexInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed hex input")
    }
}
