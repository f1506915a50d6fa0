use std::{error::Error, fmt};

/// Convenience type for a result that may contain a `PadGenError`.
pub type Result<T> = std::result::Result<T, PadGenError>;

/// Error struct for all errors returned by this crate or the crates on which it depends.
///
/// Per-pad anomalies (invalid reset codes, unknown termination values) are never reported through
/// this type; they are logged and generation continues.
#[derive(Debug)]
pub struct PadGenError {
  /// Description of the error that occurred.
  pub details: String,
}
impl PadGenError {
  pub(crate) fn new(msg: &str) -> PadGenError {
    Self {
      details: msg.to_string(),
    }
  }
}
impl fmt::Display for PadGenError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.details)
  }
}
impl Error for PadGenError {}
impl From<regex::Error> for PadGenError {
  fn from(err: regex::Error) -> Self {
    PadGenError::new(&format!("regex::Error {}", err))
  }
}
