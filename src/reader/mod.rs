//! Line-aligned chunked reading.
//!
//! - [`ChunkReader`] - Turns a byte stream into line-aligned [`Chunk`]s,
//!   spilling past its window for single lines larger than the buffer
//!
//! [`Chunk`]: crate::Chunk

mod chunked;

pub use chunked::ChunkReader;
