//! Error types for spindrift-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the spindrift-io crate.
///
/// Covers missing files, I/O failures, malformed station-file content,
/// unrecognised format selectors and unit labels, and timestamps outside
/// the representable calendar range.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system I/O failure.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when file content cannot be parsed.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        /// Path to the file that was being parsed.
        path: PathBuf,
        /// 1-indexed line number of the offending content.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a unit label is not one of the recognised values.
    #[error("unknown velocity units '{text}'")]
    UnknownUnits {
        /// The unrecognised label.
        text: String,
    },

    /// Returned when a format selector is not one of the recognised values.
    #[error("unknown series format '{name}'")]
    UnknownFormat {
        /// The unrecognised selector.
        name: String,
    },

    /// Returned when a timestamp cannot be expressed as a calendar date.
    #[error("timestamp {time} is outside the representable date range")]
    InvalidTime {
        /// The offending epoch-second timestamp.
        time: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.ossm"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.ossm");
    }

    #[test]
    fn display_io() {
        let err = IoError::Io {
            path: PathBuf::from("/data/wind.ossm"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "i/o error on /data/wind.ossm: permission denied"
        );
    }

    #[test]
    fn display_parse() {
        let err = IoError::Parse {
            path: PathBuf::from("/data/wind.ossm"),
            line: 7,
            reason: "malformed data row".to_string(),
        };
        assert_eq!(err.to_string(), "/data/wind.ossm:7: malformed data row");
    }

    #[test]
    fn display_unknown_units() {
        let err = IoError::UnknownUnits {
            text: "furlongs".to_string(),
        };
        assert_eq!(err.to_string(), "unknown velocity units 'furlongs'");
    }

    #[test]
    fn display_unknown_format() {
        let err = IoError::UnknownFormat {
            name: "complex".to_string(),
        };
        assert_eq!(err.to_string(), "unknown series format 'complex'");
    }

    #[test]
    fn display_invalid_time() {
        let err = IoError::InvalidTime { time: i64::MIN };
        assert!(err.to_string().contains("outside the representable"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
