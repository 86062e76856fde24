//! I/O module for reading sequences and writing images.
//!
//! Provides the FASTA loader and the PNG writer.

pub mod fasta;
pub mod png;

// Re-export main types
pub use fasta::{FastaReader, SequenceCollection, SequenceRecord};
pub use png::PngWriter;
