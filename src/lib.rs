//! linescan
//!
//! Streaming validation of very large line-oriented files.
//!
//! `linescan` feeds every line of a byte stream to a pluggable per-line check
//! and reports the 1-based numbers of the lines that fail. The heart of the
//! crate is [`ChunkReader`]: it batches lines into chunks whose boundaries
//! always fall on line boundaries, so files far larger than memory stream
//! through without ever corrupting line numbers or splitting a line - even
//! when a single line is larger than the read buffer.
//!
//! The crate intentionally:
//! - does NOT interpret line content (checks are a pluggable seam)
//! - does NOT manage concurrency (one sequential pass)
//! - does NOT load whole files (memory is bounded by chunk size and the
//!   longest single line)
//!
//! It only does one thing: **Read bytes → number lines → report failures**
//!
//! # Scanning
//!
//! ```no_run
//! use std::fs::File;
//! use std::io;
//! use linescan::{NtriplesCheck, ScanError, Scanner};
//!
//! fn main() -> Result<(), ScanError> {
//!     let file = File::open("data.rdf")?;
//!     let scanner = Scanner::new(NtriplesCheck);
//!
//!     let report = scanner.scan(file, &mut io::stdout())?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! # Chunked reading only
//!
//! ```no_run
//! use std::fs::File;
//! use linescan::{ChunkReader, ScanConfig, ScanError};
//!
//! fn main() -> Result<(), ScanError> {
//!     let file = File::open("data.rdf")?;
//!     for chunk in ChunkReader::new(file, ScanConfig::default()) {
//!         let chunk = chunk?;
//!         println!("chunk of {} lines", chunk.line_count());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;
mod ntriples;
mod reader;
mod scan;

//
// Public surface (intentionally tiny)
//

pub use chunk::{Chunk, Lines};
pub use config::{DEFAULT_MAX_LINES_PER_CHUNK, DEFAULT_NOMINAL_BUFFER_BYTES, ScanConfig};
pub use error::ScanError;
pub use ntriples::NtriplesCheck;
pub use reader::ChunkReader;
pub use scan::{LineCheck, LineFailure, Outcome, Report, Scanner};
