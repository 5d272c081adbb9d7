use tracing::debug;

use crate::color::ColorReader;
use crate::error::DecodeError;
use crate::model::{
    CapStyle, CartographicLineLayer, JoinStyle, Layer, LayerKind, LineSymbol, LineType,
    SimpleLineLayer,
};

use super::cursor::Cursor;
use super::header::{self, LineSlot, ObjectKind};
use super::layout;
use super::parser::read_layer_flags;

/// Read the body of a line symbol: layer count, layers, flag arrays, and
/// the end-of-layer-list terminator.
pub fn read_line_symbol(
    cursor: &mut Cursor<'_>,
    colors: &dyn ColorReader,
) -> Result<LineSymbol, DecodeError> {
    let count_offset = cursor.tell();
    let count = cursor.read_u32_le()?;
    debug!(layers = count, offset = count_offset, "line symbol");

    let mut layers = Vec::new();
    for _ in 0..count {
        let offset = cursor.tell();
        let slot = header::create_line_layer(cursor)?;
        let kind = read_line_layer(slot, offset, cursor, colors)?;
        layers.push(Layer::new(kind));
    }
    read_layer_flags(cursor, &mut layers)?;

    cursor.consume_padding();
    cursor.expect_terminator(layout::END_OF_LAYER_LIST, "line symbol")?;
    Ok(LineSymbol { layers })
}

fn read_line_layer(
    slot: LineSlot,
    offset: usize,
    cursor: &mut Cursor<'_>,
    colors: &dyn ColorReader,
) -> Result<LayerKind, DecodeError> {
    match slot {
        LineSlot::SimpleLine => read_simple_line_layer(cursor, colors).map(LayerKind::SimpleLine),
        LineSlot::CartographicLine => {
            read_cartographic_line_layer(cursor, colors).map(LayerKind::CartographicLine)
        }
        // A symbol has no enabled/locked slots, so it can only appear as a
        // fill outline.
        LineSlot::Symbol => Err(DecodeError::TypeMismatch {
            offset,
            expected: "line layer",
            found: ObjectKind::LineSymbol,
        }),
    }
}

pub fn read_simple_line_layer(
    cursor: &mut Cursor<'_>,
    colors: &dyn ColorReader,
) -> Result<SimpleLineLayer, DecodeError> {
    cursor.expect_bytes(&layout::SIMPLE_LAYER_MARKER, "simple line marker")?;
    cursor.consume_padding();

    let color_model = colors.read_color_model(cursor)?;
    cursor.expect_magic(&layout::COLOR_MAGIC, "simple line layer")?;
    cursor.consume_padding();

    let color = colors.read_color(cursor)?;
    let width = cursor.read_f64_le()?;
    let line_type = read_line_type(cursor)?;

    cursor.expect_terminator(layout::END_OF_LAYER, "simple line layer")?;
    cursor.rise();
    cursor.skip(layout::SIMPLE_LINE_TRAILER_LEN)?;

    Ok(SimpleLineLayer {
        color_model,
        color,
        width,
        line_type,
    })
}

pub fn read_cartographic_line_layer(
    cursor: &mut Cursor<'_>,
    colors: &dyn ColorReader,
) -> Result<CartographicLineLayer, DecodeError> {
    cursor.expect_bytes(&layout::CARTOGRAPHIC_LAYER_MARKER, "cartographic line marker")?;

    let cap = read_cap(cursor)?;
    cursor.expect_bytes(&layout::CARTOGRAPHIC_STYLE_FILLER, "cap filler")?;
    let join = read_join(cursor)?;
    cursor.expect_bytes(&layout::CARTOGRAPHIC_STYLE_FILLER, "join filler")?;

    let width = cursor.read_f64_le()?;
    cursor.expect_bytes(&layout::CARTOGRAPHIC_WIDTH_FILLER, "width filler")?;
    let offset = cursor.read_f64_le()?;

    let color_model = colors.read_color_model(cursor)?;
    cursor.expect_magic(&layout::COLOR_MAGIC, "cartographic line layer")?;
    cursor.consume_padding();
    let color = colors.read_color(cursor)?;

    // Never interpreted.
    cursor.skip(layout::CARTOGRAPHIC_OPAQUE_LEN)?;

    cursor.expect_terminator(layout::END_OF_LAYER, "cartographic line layer")?;
    cursor.rise();
    cursor.skip(layout::CARTOGRAPHIC_TRAILER_LEN)?;

    Ok(CartographicLineLayer {
        color_model,
        color,
        width,
        offset,
        cap,
        join,
    })
}

fn read_line_type(cursor: &mut Cursor<'_>) -> Result<LineType, DecodeError> {
    let offset = cursor.tell();
    let value = cursor.read_u32_le()?;
    LineType::from_raw(value).ok_or(DecodeError::UnknownLineType { offset, value })
}

fn read_cap(cursor: &mut Cursor<'_>) -> Result<CapStyle, DecodeError> {
    let offset = cursor.tell();
    let value = cursor.read_u8()?;
    CapStyle::from_raw(value).ok_or(DecodeError::UnknownCapStyle { offset, value })
}

fn read_join(cursor: &mut Cursor<'_>) -> Result<JoinStyle, DecodeError> {
    let offset = cursor.tell();
    let value = cursor.read_u8()?;
    JoinStyle::from_raw(value).ok_or(DecodeError::UnknownJoinStyle { offset, value })
}
