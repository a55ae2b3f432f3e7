//! Error types and handling infrastructure for wrzeczak.
//!
//! This module provides a centralized error handling system using `thiserror`.
//! Invariant violations that were fatal aborts in earlier iterations of the
//! renderer are recoverable `Result`s here; only the binary entry point turns
//! an error into a process exit, using [`WrzeczakError::exit_code`] and
//! [`WrzeczakError::fatal_diagnostic`].
//!
//! ## Design Principles
//!
//! - **Recoverable by default**: callers and tests observe failures as values
//! - **Stable exit codes**: each invariant violation keeps its historical code
//! - **Consistency**: standardized Result type across all modules

use crate::message::MessageKind;
use thiserror::Error;

/// Exit code for a message whose field count does not match its format.
pub const MALFORMED_MESSAGE_CODE: i32 = -65;

/// Exit code for a message format tag the renderer does not implement.
pub const UNKNOWN_FORMAT_CODE: i32 = -64;

/// Exit code for terminal session failures, which have no historical code.
pub const SESSION_FAILURE_CODE: i32 = -1;

/// The main error type for wrzeczak operations.
#[derive(Error, Debug)]
pub enum WrzeczakError {
    /// A raw message carried the wrong number of fields for its format tag.
    #[error("Message constructed with incorrect format")]
    MalformedMessage {
        kind: MessageKind,
        expected: usize,
        actual: usize,
    },

    /// A raw message carried a format tag outside the implemented set.
    #[error("Feature is not yet implemented")]
    UnknownFormat { tag: u8 },

    /// Terminal session failures (raw mode, drawing, input).
    #[error("Terminal session failed: {message}")]
    Session {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for wrzeczak operations.
pub type Result<T> = std::result::Result<T, WrzeczakError>;

impl WrzeczakError {
    /// Create a Session error from an io::Error with additional context
    pub fn session(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Session {
            message: message.into(),
            source,
        }
    }

    /// Process exit code reported when this error aborts the program.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedMessage { .. } => MALFORMED_MESSAGE_CODE,
            Self::UnknownFormat { .. } => UNKNOWN_FORMAT_CODE,
            Self::Session { .. } => SESSION_FAILURE_CODE,
        }
    }

    /// One-line stderr banner printed on the fatal path.
    ///
    /// Matches the historical format: `WRZECZAK SYSTEM ERROR [<code>]: <message>.`
    pub fn fatal_diagnostic(&self) -> String {
        format!("WRZECZAK SYSTEM ERROR [{:02}]: {}.", self.exit_code(), self)
    }
}

// Automatic conversion from io::Error to WrzeczakError
impl From<std::io::Error> for WrzeczakError {
    fn from(err: std::io::Error) -> Self {
        Self::Session {
            message: "terminal I/O failed".to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let malformed = WrzeczakError::MalformedMessage {
            kind: MessageKind::Character,
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            malformed.to_string(),
            "Message constructed with incorrect format"
        );

        let unknown = WrzeczakError::UnknownFormat { tag: 99 };
        assert_eq!(unknown.to_string(), "Feature is not yet implemented");

        let session = WrzeczakError::session(
            "draw failed",
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"),
        );
        assert_eq!(session.to_string(), "Terminal session failed: draw failed");
    }

    #[test]
    fn test_exit_codes() {
        let malformed = WrzeczakError::MalformedMessage {
            kind: MessageKind::System,
            expected: 1,
            actual: 3,
        };
        assert_eq!(malformed.exit_code(), -65);

        let unknown = WrzeczakError::UnknownFormat { tag: 0 };
        assert_eq!(unknown.exit_code(), -64);
    }

    #[test]
    fn test_fatal_diagnostic_format() {
        let malformed = WrzeczakError::MalformedMessage {
            kind: MessageKind::Character,
            expected: 2,
            actual: 0,
        };
        assert_eq!(
            malformed.fatal_diagnostic(),
            "WRZECZAK SYSTEM ERROR [-65]: Message constructed with incorrect format."
        );

        let unknown = WrzeczakError::UnknownFormat { tag: 42 };
        assert_eq!(
            unknown.fatal_diagnostic(),
            "WRZECZAK SYSTEM ERROR [-64]: Feature is not yet implemented."
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: WrzeczakError = io_err.into();

        match err {
            WrzeczakError::Session { message, .. } => {
                assert_eq!(message, "terminal I/O failed");
            }
            _ => panic!("Expected Session variant"),
        }
    }
}
