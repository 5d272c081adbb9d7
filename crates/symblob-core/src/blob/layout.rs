//! Wire constants for the symbol blob grammar.
//!
//! The format has no public description; every value here was recovered
//! from real blobs and is checked byte for byte.

/// Magic that follows the 2-byte type code in every object header.
pub const HEADER_MAGIC: [u8; 14] = [
    0x14, 0x79, 0x92, 0xc8, 0xd0, 0x11, 0x8b, 0xb6, 0x08, 0x00, 0x09, 0xee, 0x4e, 0x41,
];
pub const TYPE_CODE_LEN: usize = 2;
pub const DEPTH_MARKER_LEN: usize = 2;
pub const HEADER_LEN: usize = TYPE_CODE_LEN + HEADER_MAGIC.len();

/// Magic that follows every color-model tag.
pub const COLOR_MAGIC: [u8; 18] = [
    0xc4, 0xe9, 0x7e, 0x23, 0xd1, 0xd0, 0x11, 0x83, 0x83, 0x08, 0x00, 0x09, 0xb9, 0x96, 0xcc, 0x01,
    0x00, 0x01,
];

pub const FILL_SYMBOL_CODE: u16 = 0xe604;
pub const MARKER_SYMBOL_CODE: u16 = 0xe5ff;
pub const LINE_SYMBOL_CODE: u16 = 0xe5fa;
pub const SIMPLE_LINE_LAYER_CODE: u16 = 0xe5f9;
pub const CARTOGRAPHIC_LINE_LAYER_CODE: u16 = 0xe5fb;
pub const SIMPLE_FILL_LAYER_CODE: u16 = 0xe603;

/// Marker byte read right after a symbol header.
pub const SYMBOL_MARKER: u8 = 0x0d;
pub const END_OF_LAYER: u8 = 0x0d;
pub const END_OF_LAYER_LIST: u8 = 0x02;

pub const SIMPLE_LAYER_MARKER: [u8; 1] = [0x01];
pub const CARTOGRAPHIC_LAYER_MARKER: [u8; 2] = [0x01, 0x00];
pub const CARTOGRAPHIC_STYLE_FILLER: [u8; 3] = [0x00; 3];
pub const CARTOGRAPHIC_WIDTH_FILLER: [u8; 1] = [0x00];

pub const SIMPLE_LINE_TRAILER_LEN: usize = 7;
pub const CARTOGRAPHIC_OPAQUE_LEN: usize = 46;
pub const CARTOGRAPHIC_TRAILER_LEN: usize = 24;
pub const SIMPLE_FILL_TRAILER_LEN: usize = 11;
/// Unexamined bytes between the color magic and the color record in fill
/// grammars.
pub const FILL_COLOR_GAP_LEN: usize = 2;

/// Value of an enabled/locked flag that means `true`.
pub const FLAG_SET: u32 = 1;
