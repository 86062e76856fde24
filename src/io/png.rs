//! PNG encoding of a painted canvas.

use crate::render::Canvas;
use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer for PNG images
pub struct PngWriter;

impl PngWriter {
    /// Encodes `canvas` as PNG and writes it to `path`.
    ///
    /// On error the file at `path` may be missing or truncated.
    pub fn write(canvas: &Canvas, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create PNG file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        Self::encode_into(canvas, &mut writer)
            .with_context(|| format!("Failed to encode PNG image: {}", path.display()))?;

        writer
            .flush()
            .with_context(|| format!("Failed to flush PNG file: {}", path.display()))
    }

    /// Encodes `canvas` as an in-memory PNG.
    pub fn encode(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode_into(canvas, &mut buffer).context("Failed to encode PNG image")?;
        Ok(buffer)
    }

    fn encode_into<W: Write>(canvas: &Canvas, writer: W) -> image::ImageResult<()> {
        let image = canvas.as_image();
        PngEncoder::new(writer).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
    }
}
