//! All error types for the locedit crate.
//!
//! These are returned from all fallible operations (scanning, parsing,
//! updating). Within a scan, per-file parse failures are absorbed and
//! logged; everything else surfaces to the caller.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("scan target is not a readable directory: {0}")]
    ScanTargetUnavailable(PathBuf),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new parse error for the given 1-based line number.
    pub fn parse_error(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_scan_target_unavailable_error() {
        let error = Error::ScanTargetUnavailable(PathBuf::from("/does/not/exist"));
        assert_eq!(
            error.to_string(),
            "scan target is not a readable directory: /does/not/exist"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = Error::parse_error(3, "expected `=` after key");
        assert_eq!(
            error.to_string(),
            "parse error at line 3: expected `=` after key"
        );
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::parse_error(1, "unterminated quoted string");
        let debug = format!("{:?}", error);
        assert!(debug.contains("Parse"));
        assert!(debug.contains("unterminated"));
    }
}
