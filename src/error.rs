//! Error types for the terminal front end.

use derive_more::{Display, Error};
use tracing::instrument;

/// Terminal error with location tracking.
///
/// Raised when the drawing surface cannot be set up. Moves never fail;
/// see [`MoveOutcome`](crate::MoveOutcome) for how ignored input is reported.
#[derive(Debug, Clone, Display, Error)]
#[display("Terminal error: {} at {}:{}", message, file, line)]
pub struct TuiError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TuiError {
    /// Creates a new terminal error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for TuiError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
