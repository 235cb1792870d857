//! Core chunked reader - line-aligned batching over any `Read` source.
//!
//! [`ChunkReader`] accumulates terminator-delimited lines into a batch buffer
//! and hands them out as [`Chunk`]s. A chunk boundary always coincides with a
//! line boundary: lines longer than the buffered window are handled by an
//! explicit spill mode that keeps draining the window until the terminator is
//! found, so memory use is O(max(window, longest line)) per chunk rather than
//! O(file size).
//!
//! # Example
//!
//! ```
//! use linescan::{ChunkReader, ScanConfig};
//! use std::io::Cursor;
//!
//! let source = Cursor::new(b"one\ntwo\nthree\n".to_vec());
//! let reader = ChunkReader::new(source, ScanConfig::default());
//!
//! for chunk in reader {
//!     let chunk = chunk?;
//!     for line in chunk.lines() {
//!         println!("{} bytes", line.len());
//!     }
//! }
//! # Ok::<(), linescan::ScanError>(())
//! ```

use std::io::{BufRead, BufReader, Read};

use bytes::Bytes;
use log::{debug, trace};
use memchr::memchr;

use crate::chunk::Chunk;
use crate::config::ScanConfig;
use crate::error::ScanError;

/// How the reader is currently consuming the buffered window.
///
/// `Spill` is entered for exactly one line when the window fills without a
/// terminator in sight, and left again once that line's terminator (or the
/// end of the source) is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadMode {
    /// Whole lines fit inside the buffered window.
    Window,
    /// The current line overflows the window; read until its terminator
    /// regardless of length.
    Spill,
}

/// A reader that batches whole lines from a byte stream into chunks.
///
/// `ChunkReader` wraps any [`std::io::Read`] in a buffered window of
/// `nominal_buffer_bytes` and produces successive [`Chunk`]s of up to
/// `max_lines_per_chunk` lines each. Every chunk boundary falls on a line
/// boundary; only the final chunk may end in a non-terminated fragment, and
/// only because the source itself did.
///
/// Neither config knob affects which lines are delivered or how they are
/// numbered downstream, only the batching granularity.
///
/// # End of stream
///
/// The chunk that consumes the last bytes of the source has
/// [`Chunk::is_final`] set; for an empty source that is a zero-length final
/// chunk. Once the final chunk has been returned, [`ChunkReader::next_chunk`]
/// keeps returning empty final chunks, and the [`Iterator`] impl yields
/// `None`.
///
/// # Errors
///
/// Any underlying read error other than end-of-stream surfaces as
/// [`ScanError::Io`] and is not recoverable.
pub struct ChunkReader<R> {
    inner: BufReader<R>,
    config: ScanConfig,
    /// Batch accumulator, reused across chunks.
    batch: Vec<u8>,
    /// Byte offset of the next chunk in the stream.
    offset: u64,
    mode: ReadMode,
    /// The underlying source has reported end-of-stream.
    at_eof: bool,
    /// The final chunk has been emitted.
    finished: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Creates a new chunk reader over the given source.
    ///
    /// # Example
    ///
    /// ```
    /// use linescan::{ChunkReader, ScanConfig};
    /// use std::io::Cursor;
    ///
    /// let reader = ChunkReader::new(Cursor::new(b"data\n".to_vec()), ScanConfig::default());
    /// ```
    pub fn new(reader: R, config: ScanConfig) -> Self {
        Self {
            inner: BufReader::with_capacity(config.nominal_buffer_bytes(), reader),
            config,
            batch: Vec::with_capacity(config.nominal_buffer_bytes()),
            offset: 0,
            mode: ReadMode::Window,
            at_eof: false,
            finished: false,
        }
    }

    /// Returns the configuration used by this reader.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the byte offset of the next chunk in the stream.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Reads the next line-aligned chunk from the source.
    ///
    /// Accumulates lines until `max_lines_per_chunk` is reached or the source
    /// is exhausted. On exhaustion the (possibly empty) remainder is returned
    /// with [`Chunk::is_final`] set; calling `next_chunk` again after that
    /// keeps returning an empty final chunk.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the underlying source fails with anything
    /// other than end-of-stream.
    pub fn next_chunk(&mut self) -> Result<Chunk, ScanError> {
        if self.finished {
            return Ok(Chunk::final_chunk(Bytes::new()).set_offset(self.offset));
        }

        self.batch.clear();
        let mut lines = 0usize;

        while lines < self.config.max_lines_per_chunk() && !self.at_eof {
            let appended = self.append_line()?;
            if appended == 0 {
                break;
            }
            lines += 1;
        }

        // Source exhausted: whatever accumulated (possibly including a line
        // the source cut short) is the final chunk.
        if self.at_eof {
            self.finished = true;
            return Ok(self.emit_chunk(true));
        }

        Ok(self.emit_chunk(false))
    }

    /// Appends one line (terminator included, if present) to the batch.
    ///
    /// Returns the number of bytes appended; 0 means end-of-stream. A line
    /// cut short by end-of-stream is appended without its terminator, still
    /// counts as appended bytes, and sets `at_eof`.
    fn append_line(&mut self) -> Result<usize, ScanError> {
        let mut appended = 0usize;
        loop {
            let window = self.inner.fill_buf()?;
            if window.is_empty() {
                self.at_eof = true;
                if self.mode == ReadMode::Spill {
                    trace!("spill line ended at end of stream, {} bytes", appended);
                    self.mode = ReadMode::Window;
                }
                return Ok(appended);
            }

            match memchr(b'\n', window) {
                Some(i) => {
                    self.batch.extend_from_slice(&window[..=i]);
                    self.inner.consume(i + 1);
                    appended += i + 1;
                    if self.mode == ReadMode::Spill {
                        trace!("leaving spill mode after {} byte line", appended);
                        self.mode = ReadMode::Window;
                    }
                    return Ok(appended);
                }
                None => {
                    // No terminator in the whole window: the line is longer
                    // than the buffer. Take the window and keep going until
                    // the terminator shows up, however far away it is.
                    let len = window.len();
                    self.batch.extend_from_slice(window);
                    self.inner.consume(len);
                    appended += len;
                    if self.mode == ReadMode::Window {
                        debug!(
                            "line exceeds {} byte window, entering spill mode",
                            self.config.nominal_buffer_bytes()
                        );
                        self.mode = ReadMode::Spill;
                    }
                }
            }
        }
    }

    fn emit_chunk(&mut self, is_final: bool) -> Chunk {
        let chunk_offset = self.offset;
        self.offset += self.batch.len() as u64;
        trace!(
            "emitting {} byte chunk at offset {} (final: {})",
            self.batch.len(),
            chunk_offset,
            is_final
        );

        let data = Bytes::copy_from_slice(&self.batch);
        let chunk = if is_final {
            Chunk::final_chunk(data)
        } else {
            Chunk::new(data)
        };
        chunk.set_offset(chunk_offset)
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<Chunk, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_chunk() {
            Ok(chunk) => Some(Ok(chunk)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
