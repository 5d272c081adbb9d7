use tracing::debug;

use crate::color::ColorReader;
use crate::error::DecodeError;
use crate::model::{FillSymbol, Layer, LayerKind, Outline, SimpleFillLayer};

use super::cursor::Cursor;
use super::header::{self, FillSlot, LineSlot};
use super::layout;
use super::line::{read_cartographic_line_layer, read_line_symbol, read_simple_line_layer};
use super::parser::{read_layer_flags, read_symbol_prologue};

/// Read the body of a fill symbol.
///
/// The leading color is always black in known blobs; its purpose is
/// unknown, so anything else is reported rather than accepted. Unlike line
/// symbols, no list terminator is enforced after the flag arrays.
pub fn read_fill_symbol(
    cursor: &mut Cursor<'_>,
    colors: &dyn ColorReader,
) -> Result<FillSymbol, DecodeError> {
    let color_model = colors.read_color_model(cursor)?;
    cursor.expect_magic(&layout::COLOR_MAGIC, "fill symbol")?;
    cursor.skip(layout::FILL_COLOR_GAP_LEN)?;

    let sentinel_offset = cursor.tell();
    let sentinel = colors.read_color(cursor)?;
    if !sentinel.is_black_sentinel() {
        return Err(DecodeError::UnexpectedSentinelColor {
            offset: sentinel_offset,
            found: sentinel,
        });
    }

    let count_offset = cursor.tell();
    let count = cursor.read_u32_le()?;
    debug!(layers = count, offset = count_offset, "fill symbol");

    let mut layers = Vec::new();
    for _ in 0..count {
        let slot = header::create_fill_layer(cursor)?;
        let kind = match slot {
            FillSlot::SimpleFill => LayerKind::SimpleFill(read_simple_fill_layer(cursor, colors)?),
        };
        layers.push(Layer::new(kind));
    }
    read_layer_flags(cursor, &mut layers)?;

    Ok(FillSymbol {
        color_model,
        layers,
    })
}

pub fn read_simple_fill_layer(
    cursor: &mut Cursor<'_>,
    colors: &dyn ColorReader,
) -> Result<SimpleFillLayer, DecodeError> {
    cursor.expect_bytes(&layout::SIMPLE_LAYER_MARKER, "simple fill marker")?;
    cursor.consume_padding();

    let outline = read_outline(cursor, colors)?;
    cursor.consume_padding();

    // Some writers close the outline with an extra list terminator.
    let start = cursor.tell();
    match cursor.read_u8() {
        Ok(layout::END_OF_LAYER_LIST) => {
            debug!(offset = start, "outline list terminator");
            cursor.consume_padding();
        }
        _ => cursor.seek(start)?,
    }

    let color_model = colors.read_color_model(cursor)?;
    cursor.expect_magic(&layout::COLOR_MAGIC, "simple fill layer")?;
    cursor.skip(layout::FILL_COLOR_GAP_LEN)?;
    let color = colors.read_color(cursor)?;

    cursor.expect_terminator(layout::END_OF_LAYER, "simple fill layer")?;
    cursor.rise();
    cursor.skip(layout::SIMPLE_FILL_TRAILER_LEN)?;

    Ok(SimpleFillLayer {
        color_model,
        color,
        outline,
    })
}

/// Resolve the outline slot. The type code decides between a single line
/// layer and a complete nested line symbol.
fn read_outline(cursor: &mut Cursor<'_>, colors: &dyn ColorReader) -> Result<Outline, DecodeError> {
    let offset = cursor.tell();
    let slot = header::create_line_layer(cursor)?;
    match slot {
        LineSlot::Symbol => {
            debug!(offset, "outline symbol");
            read_symbol_prologue(cursor)?;
            let symbol = read_line_symbol(cursor, colors)?;
            Ok(Outline::Symbol(Box::new(symbol)))
        }
        LineSlot::SimpleLine => {
            let layer = read_simple_line_layer(cursor, colors)?;
            Ok(Outline::Layer(Box::new(Layer::new(LayerKind::SimpleLine(layer)))))
        }
        LineSlot::CartographicLine => {
            let layer = read_cartographic_line_layer(cursor, colors)?;
            Ok(Outline::Layer(Box::new(Layer::new(
                LayerKind::CartographicLine(layer),
            ))))
        }
    }
}
