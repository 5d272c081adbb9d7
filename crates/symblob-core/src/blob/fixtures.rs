//! Byte builders for unit tests.

use crate::color::{ColorModel, LabColorReader};

use super::layout;

#[derive(Debug, Clone, Copy)]
pub enum TestColor {
    /// L* just above 50, neutral; its first byte is non-zero so it survives
    /// a preceding padding run.
    Grey,
    Black,
}

pub fn color_record(color: TestColor) -> Vec<u8> {
    let l = match color {
        TestColor::Grey => f64::from_bits(0x4049_0000_0000_0001),
        TestColor::Black => 0.0,
    };
    let mut bytes = Vec::with_capacity(LabColorReader::RECORD_LEN);
    bytes.extend_from_slice(&l.to_le_bytes());
    bytes.extend_from_slice(&0f64.to_le_bytes());
    bytes.extend_from_slice(&0f64.to_le_bytes());
    bytes.extend_from_slice(&[0, 0]);
    bytes
}

pub fn layer_header(code: u16, depth: u16) -> Vec<u8> {
    let mut bytes = code.to_le_bytes().to_vec();
    bytes.extend_from_slice(&layout::HEADER_MAGIC);
    bytes.extend_from_slice(&depth.to_le_bytes());
    bytes
}

fn color_prefix(bytes: &mut Vec<u8>) {
    bytes.push(LabColorReader::model_tag(ColorModel::Rgb));
    bytes.extend_from_slice(&layout::COLOR_MAGIC);
}

pub fn simple_line_body(color: TestColor, width: f64, line_type: u32) -> Vec<u8> {
    let mut bytes = layout::SIMPLE_LAYER_MARKER.to_vec();
    bytes.extend_from_slice(&[0, 0, 0]);
    color_prefix(&mut bytes);
    bytes.extend_from_slice(&[0, 0]);
    bytes.extend(color_record(color));
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&line_type.to_le_bytes());
    bytes.push(layout::END_OF_LAYER);
    bytes.extend_from_slice(&[0; layout::SIMPLE_LINE_TRAILER_LEN]);
    bytes
}

pub fn cartographic_line_body(
    color: TestColor,
    cap: u8,
    join: u8,
    width: f64,
    offset: f64,
) -> Vec<u8> {
    let mut bytes = layout::CARTOGRAPHIC_LAYER_MARKER.to_vec();
    bytes.push(cap);
    bytes.extend_from_slice(&layout::CARTOGRAPHIC_STYLE_FILLER);
    bytes.push(join);
    bytes.extend_from_slice(&layout::CARTOGRAPHIC_STYLE_FILLER);
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&layout::CARTOGRAPHIC_WIDTH_FILLER);
    bytes.extend_from_slice(&offset.to_le_bytes());
    color_prefix(&mut bytes);
    bytes.push(0);
    bytes.extend(color_record(color));
    bytes.extend_from_slice(&[0xaa; layout::CARTOGRAPHIC_OPAQUE_LEN]);
    bytes.push(layout::END_OF_LAYER);
    bytes.extend_from_slice(&[0; layout::CARTOGRAPHIC_TRAILER_LEN]);
    bytes
}

/// Simple fill layer body at `depth` whose outline is a simple line layer.
pub fn simple_fill_body(depth: u16, fill: TestColor, list_terminator: bool) -> Vec<u8> {
    let mut bytes = layout::SIMPLE_LAYER_MARKER.to_vec();
    bytes.extend_from_slice(&[0, 0]);
    bytes.extend(layer_header(layout::SIMPLE_LINE_LAYER_CODE, depth + 1));
    bytes.extend(simple_line_body(TestColor::Grey, 0.4, 0));
    fill_tail(&mut bytes, fill, list_terminator);
    bytes
}

/// Everything after the outline of a simple fill layer.
pub fn fill_tail(bytes: &mut Vec<u8>, fill: TestColor, list_terminator: bool) {
    bytes.extend_from_slice(&[0, 0, 0]);
    if list_terminator {
        bytes.push(layout::END_OF_LAYER_LIST);
        bytes.extend_from_slice(&[0, 0]);
    }
    color_prefix(bytes);
    bytes.extend_from_slice(&[0; layout::FILL_COLOR_GAP_LEN]);
    bytes.extend(color_record(fill));
    bytes.push(layout::END_OF_LAYER);
    bytes.extend_from_slice(&[0; layout::SIMPLE_FILL_TRAILER_LEN]);
}
