//! Canvas rendering: base colours, image dimensions and pixel painting.

pub mod canvas;
pub mod palette;

pub use canvas::{Canvas, Dimensions};
pub use palette::ColorMap;
