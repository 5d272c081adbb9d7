//! Color decoding collaborator.
//!
//! The symbol grammar only needs to know where a color-model tag and a
//! color record start and how many bytes they consume. That boundary is the
//! [`ColorReader`] trait; [`LabColorReader`] is the stock implementation.

use serde::{Deserialize, Serialize};

use crate::blob::Cursor;
use crate::error::DecodeError;

mod lab;

pub use lab::LabColorReader;

/// Color model declared ahead of a color record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorModel {
    Rgb,
    Cmyk,
    Hsv,
    Hls,
    Gray,
}

/// Decoded color value, expressed as 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub dither: bool,
    pub is_null: bool,
}

impl Color {
    pub const BLACK: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
        dither: false,
        is_null: false,
    };

    /// True for opaque, undithered black.
    pub fn is_black_sentinel(&self) -> bool {
        *self == Color::BLACK
    }
}

/// Reads color-model tags and color records from a blob.
///
/// Implementations must consume exactly the bytes of the tag or record so
/// the surrounding grammar stays aligned.
pub trait ColorReader {
    fn read_color_model(&self, cursor: &mut Cursor<'_>) -> Result<ColorModel, DecodeError>;
    fn read_color(&self, cursor: &mut Cursor<'_>) -> Result<Color, DecodeError>;
}
