//! The Chunk type - a line-aligned batch of raw bytes.

use bytes::Bytes;
use memchr::memchr;
use std::fmt;

/// A line-aligned batch of bytes from a scanned source.
///
/// A chunk holds zero or more complete lines: it never ends in the middle of
/// a line unless it is the final chunk of the stream and the source itself
/// ended without a trailing terminator. Chunking is invisible to line
/// numbering; it only bounds how much data is in flight per read call.
///
/// # Example
///
/// ```
/// use linescan::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk {
///     data: Bytes::from_static(b"first\nsecond\n"),
///     offset: Some(0),
///     is_final: false,
/// };
///
/// let lines: Vec<_> = chunk.lines().collect();
/// assert_eq!(lines, vec![&b"first"[..], &b"second"[..]]);
/// ```
#[derive(Debug, Clone)]
pub struct Chunk {
    /// The chunk data.
    pub data: Bytes,

    /// The byte offset in the original stream (if available).
    pub offset: Option<u64>,

    /// Whether this is the last chunk of the stream.
    ///
    /// A zero-length final chunk is valid and signals termination with no
    /// remaining data.
    pub is_final: bool,
}

impl Chunk {
    /// Creates a new non-final chunk with the given data.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            offset: None,
            is_final: false,
        }
    }

    /// Creates a final chunk with the given data (may be empty).
    pub fn final_chunk(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            offset: None,
            is_final: true,
        }
    }

    /// Sets the offset.
    pub fn set_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns the length of the chunk data in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the byte offset, if set.
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Returns true if this is the last chunk of the stream.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Returns an iterator over the line payloads in this chunk.
    ///
    /// Terminators are stripped. A trailing non-terminated fragment is
    /// yielded as a line only when the chunk is final and the fragment is
    /// non-empty; non-final chunks are terminator-aligned by construction,
    /// so nothing is lost.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            rest: &self.data,
            is_final: self.is_final,
            done: false,
        }
    }

    /// Returns the number of lines in this chunk, under the same trailing
    /// fragment rule as [`Chunk::lines`].
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl From<Bytes> for Chunk {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes", self.len())?;
        if let Some(offset) = self.offset {
            write!(f, " @ {}", offset)?;
        }
        if self.is_final {
            write!(f, ", final")?;
        }
        write!(f, ")")
    }
}

/// Iterator over the line payloads of a [`Chunk`].
///
/// Yields each line's bytes with the terminator stripped.
#[derive(Debug)]
pub struct Lines<'a> {
    rest: &'a [u8],
    is_final: bool,
    done: bool,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match memchr(b'\n', self.rest) {
            Some(i) => {
                let line = &self.rest[..i];
                self.rest = &self.rest[i + 1..];
                Some(line)
            }
            None => {
                self.done = true;
                if self.is_final && !self.rest.is_empty() {
                    Some(self.rest)
                } else {
                    None
                }
            }
        }
    }
}
