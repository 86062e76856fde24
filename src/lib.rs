//! Paint FASTA alignments as PNG images, one pixel row per sequence.

pub mod cli;
pub mod io;
pub mod pipeline;
pub mod render;
