use crate::io::fasta::SequenceCollection;
use crate::render::palette::{ColorMap, BACKGROUND};
use image::{Rgb, RgbImage};
use log::debug;

/// Offset of the first painted row and column from the image origin.
pub const MARGIN_OFFSET: u32 = 50;
/// Total padding added to each dimension (both sides of the painted area).
pub const MARGIN_TOTAL: u32 = 100;
/// Pixels per base, horizontally and vertically.
pub const CELL_WIDTH: u32 = 1;
pub const CELL_HEIGHT: u32 = 1;

/// Pixel size of the image for a given collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Width fits the longest record plus the margin, height one row per record
    /// plus the margin. Neither is ever below [`MARGIN_TOTAL`].
    pub fn for_collection(collection: &SequenceCollection) -> Self {
        Self {
            width: to_pixels(collection.max_len(), CELL_WIDTH) + MARGIN_TOTAL,
            height: to_pixels(collection.len(), CELL_HEIGHT) + MARGIN_TOTAL,
        }
    }
}

fn to_pixels(cells: usize, cell_size: u32) -> u32 {
    u32::try_from(cells)
        .unwrap_or(u32::MAX)
        .saturating_mul(cell_size)
}

/// A fully painted RGB pixel grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Paints one row per record and one cell per base on a white background.
    ///
    /// Record `i`, base `j` lands at pixel `(50 + j, 50 + i)`. Bases without a
    /// colour in [`ColorMap`] leave the background untouched.
    pub fn render(collection: &SequenceCollection) -> Self {
        let Dimensions { width, height } = Dimensions::for_collection(collection);
        debug!("Allocating {width}x{height} canvas");

        let mut image = RgbImage::from_pixel(width, height, BACKGROUND);
        let colors = ColorMap;

        for (row, record) in collection.iter().enumerate() {
            for (column, base) in record.sequence.chars().enumerate() {
                if let Some(color) = colors.color_of(base) {
                    let x = MARGIN_OFFSET + to_pixels(column, CELL_WIDTH);
                    let y = MARGIN_OFFSET + to_pixels(row, CELL_HEIGHT);
                    fill_cell(&mut image, x, y, color);
                }
            }
        }

        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }
}

fn fill_cell(image: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
    for px in x..x + CELL_WIDTH {
        for py in y..y + CELL_HEIGHT {
            image.put_pixel(px, py, color);
        }
    }
}
