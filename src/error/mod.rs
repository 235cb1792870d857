//! Error types for linescan.

use std::fmt;

/// Errors that can occur during a scan.
#[derive(Debug)]
pub enum ScanError {
    /// An I/O error occurred while reading the input source.
    ///
    /// End-of-source is not an error; anything else from the underlying
    /// reader aborts the scan through this variant.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "io error: {}", e),
            ScanError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(e: std::io::Error) -> Self {
        ScanError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ScanError = io_err.into();
        matches!(err, ScanError::Io(_));
    }

    #[test]
    fn test_display() {
        let err = ScanError::InvalidConfig {
            message: "nominal_buffer_bytes must be non-zero",
        };
        assert!(err.to_string().contains("invalid config"));
    }
}
