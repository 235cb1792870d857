//! Configuration for scanning behavior.
//!
//! - [`ScanConfig`] - Controls how many bytes the reader buffers and how many
//!   lines it batches per chunk.
//!
//! Neither knob affects correctness: every line is delivered exactly once with
//! a stable number regardless of buffer or batch size. They only trade
//! throughput against per-chunk latency and memory.
//!
//! # Example
//!
//! ```
//! use linescan::ScanConfig;
//!
//! // Smaller chunks, e.g. for tests
//! let config = ScanConfig::new(64 * 1024, 1000)?;
//!
//! # Ok::<(), linescan::ScanError>(())
//! ```

use crate::error::ScanError;

/// Default size of the reader's internal window (1 MiB).
pub const DEFAULT_NOMINAL_BUFFER_BYTES: usize = 1024 * 1024;

/// Default maximum number of lines batched into one chunk (100,000).
pub const DEFAULT_MAX_LINES_PER_CHUNK: usize = 100_000;

/// Configuration for chunked line scanning.
///
/// `ScanConfig` controls the reader's buffered window size and the number of
/// lines accumulated per chunk:
///
/// - `nominal_buffer_bytes` - Size of the buffered read window. A single line
///   longer than this is still delivered whole (the reader spills past the
///   window for that one line), so this bounds steady-state memory, not line
///   length.
/// - `max_lines_per_chunk` - How many lines are batched before a chunk is
///   handed to the caller.
///
/// # Example
///
/// ```
/// use linescan::ScanConfig;
///
/// // Use defaults (1 MiB window, 100,000 lines per chunk)
/// let config = ScanConfig::default();
///
/// // Custom configuration
/// let config = ScanConfig::new(64 * 1024, 10_000)?;
///
/// // Builder pattern
/// let config = ScanConfig::default()
///     .with_nominal_buffer_bytes(8 * 1024)
///     .with_max_lines_per_chunk(500);
/// # Ok::<(), linescan::ScanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Size of the buffered read window in bytes.
    nominal_buffer_bytes: usize,

    /// Maximum number of lines accumulated into one chunk.
    max_lines_per_chunk: usize,
}

impl ScanConfig {
    /// Creates a new configuration with the specified knobs.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if either value is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use linescan::ScanConfig;
    ///
    /// let config = ScanConfig::new(64 * 1024, 1000)?;
    /// assert_eq!(config.nominal_buffer_bytes(), 64 * 1024);
    /// # Ok::<(), linescan::ScanError>(())
    /// ```
    pub fn new(nominal_buffer_bytes: usize, max_lines_per_chunk: usize) -> Result<Self, ScanError> {
        if nominal_buffer_bytes == 0 {
            return Err(ScanError::InvalidConfig {
                message: "nominal_buffer_bytes must be non-zero",
            });
        }

        if max_lines_per_chunk == 0 {
            return Err(ScanError::InvalidConfig {
                message: "max_lines_per_chunk must be non-zero",
            });
        }

        Ok(Self {
            nominal_buffer_bytes,
            max_lines_per_chunk,
        })
    }

    /// Sets the buffered window size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ScanConfig::validate`] to check if the configuration is valid.
    pub fn with_nominal_buffer_bytes(mut self, bytes: usize) -> Self {
        self.nominal_buffer_bytes = bytes;
        self
    }

    /// Sets the per-chunk line batch limit.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ScanConfig::validate`] to check if the configuration is valid.
    pub fn with_max_lines_per_chunk(mut self, lines: usize) -> Self {
        self.max_lines_per_chunk = lines;
        self
    }

    /// Returns the buffered window size in bytes.
    pub fn nominal_buffer_bytes(&self) -> usize {
        self.nominal_buffer_bytes
    }

    /// Returns the per-chunk line batch limit.
    pub fn max_lines_per_chunk(&self) -> usize {
        self.max_lines_per_chunk
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use linescan::ScanConfig;
    ///
    /// let config = ScanConfig::default().with_max_lines_per_chunk(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ScanError> {
        Self::new(self.nominal_buffer_bytes, self.max_lines_per_chunk).map(|_| ())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            nominal_buffer_bytes: DEFAULT_NOMINAL_BUFFER_BYTES,
            max_lines_per_chunk: DEFAULT_MAX_LINES_PER_CHUNK,
        }
    }
}
