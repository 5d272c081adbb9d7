use tracing::debug;

use crate::color::ColorReader;
use crate::error::DecodeError;
use crate::model::{Layer, MarkerSymbol, Symbol};

use super::cursor::Cursor;
use super::fill::read_fill_symbol;
use super::header::{self, ObjectKind};
use super::layout;
use super::line::read_line_symbol;

/// Decode one symbol from a complete blob.
///
/// Bytes after the end of the symbol grammar are ignored.
pub fn decode_symbol(data: &[u8], colors: &dyn ColorReader) -> Result<Symbol, DecodeError> {
    let mut cursor = Cursor::new(data);
    let (kind, offset) = header::create_object(&mut cursor)?;

    let symbol = match kind {
        ObjectKind::LineSymbol => {
            read_symbol_prologue(&mut cursor)?;
            Symbol::Line(read_line_symbol(&mut cursor, colors)?)
        }
        ObjectKind::FillSymbol => {
            read_symbol_prologue(&mut cursor)?;
            Symbol::Fill(read_fill_symbol(&mut cursor, colors)?)
        }
        ObjectKind::MarkerSymbol => {
            read_symbol_prologue(&mut cursor)?;
            let raw = cursor.read_bytes(cursor.remaining())?;
            Symbol::Marker(MarkerSymbol { raw: raw.to_vec() })
        }
        found => return Err(DecodeError::ExpectedSymbol { offset, found }),
    };

    debug!(
        kind = %kind,
        layers = symbol.layers().len(),
        trailing = cursor.remaining(),
        "decoded symbol"
    );
    Ok(symbol)
}

/// Marker byte, rise, padding: shared by root and nested symbols.
pub fn read_symbol_prologue(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    cursor.expect_bytes(&[layout::SYMBOL_MARKER], "symbol marker")?;
    cursor.rise();
    cursor.consume_padding();
    Ok(())
}

/// Apply the enabled flags of every layer, then the locked flags.
pub fn read_layer_flags(cursor: &mut Cursor<'_>, layers: &mut [Layer]) -> Result<(), DecodeError> {
    for layer in layers.iter_mut() {
        layer.enabled = cursor.read_flag()?;
    }
    for layer in layers.iter_mut() {
        layer.locked = cursor.read_flag()?;
    }
    Ok(())
}
