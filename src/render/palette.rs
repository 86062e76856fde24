use image::Rgb;

/// Colour of every pixel not covered by a recognised base.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

pub const ADENINE: Rgb<u8> = Rgb([255, 0, 0]);
pub const GUANINE: Rgb<u8> = Rgb([190, 0, 95]);
pub const THYMINE: Rgb<u8> = Rgb([0, 255, 0]);
pub const CYTOSINE: Rgb<u8> = Rgb([255, 255, 0]);

/// Fixed, case-sensitive mapping from base codes to colours.
///
/// Only uppercase `A`, `G`, `T` and `C` are painted. Lowercase bases, ambiguity
/// codes such as `N`, and gap symbols have no colour and render as background,
/// so they cannot be told apart from an indel in the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorMap;

impl ColorMap {
    pub fn color_of(&self, base: char) -> Option<Rgb<u8>> {
        match base {
            'A' => Some(ADENINE),
            'G' => Some(GUANINE),
            'T' => Some(THYMINE),
            'C' => Some(CYTOSINE),
            _ => None,
        }
    }
}
