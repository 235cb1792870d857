//! Chunk types.
//!
//! - [`Chunk`] - A batch of whole lines with byte offset and final-chunk flag
//! - [`Lines`] - Iterator over the line payloads inside a chunk

mod data;

pub use data::{Chunk, Lines};
