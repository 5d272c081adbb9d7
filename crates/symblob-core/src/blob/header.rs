use std::fmt;

use tracing::trace;

use crate::error::DecodeError;

use super::cursor::Cursor;
use super::layout;

/// Object variants known to the type-code dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    FillSymbol,
    MarkerSymbol,
    LineSymbol,
    SimpleLineLayer,
    CartographicLineLayer,
    SimpleFillLayer,
}

impl ObjectKind {
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            layout::FILL_SYMBOL_CODE => Some(ObjectKind::FillSymbol),
            layout::MARKER_SYMBOL_CODE => Some(ObjectKind::MarkerSymbol),
            layout::LINE_SYMBOL_CODE => Some(ObjectKind::LineSymbol),
            layout::SIMPLE_LINE_LAYER_CODE => Some(ObjectKind::SimpleLineLayer),
            layout::CARTOGRAPHIC_LINE_LAYER_CODE => Some(ObjectKind::CartographicLineLayer),
            layout::SIMPLE_FILL_LAYER_CODE => Some(ObjectKind::SimpleFillLayer),
            _ => None,
        }
    }

    pub fn code(self) -> u16 {
        match self {
            ObjectKind::FillSymbol => layout::FILL_SYMBOL_CODE,
            ObjectKind::MarkerSymbol => layout::MARKER_SYMBOL_CODE,
            ObjectKind::LineSymbol => layout::LINE_SYMBOL_CODE,
            ObjectKind::SimpleLineLayer => layout::SIMPLE_LINE_LAYER_CODE,
            ObjectKind::CartographicLineLayer => layout::CARTOGRAPHIC_LINE_LAYER_CODE,
            ObjectKind::SimpleFillLayer => layout::SIMPLE_FILL_LAYER_CODE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::FillSymbol => "fill symbol",
            ObjectKind::MarkerSymbol => "marker symbol",
            ObjectKind::LineSymbol => "line symbol",
            ObjectKind::SimpleLineLayer => "simple line layer",
            ObjectKind::CartographicLineLayer => "cartographic line layer",
            ObjectKind::SimpleFillLayer => "simple fill layer",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read a 16-byte object header plus its depth marker and return the raw
/// type code.
///
/// Dives one level as a side effect; the depth marker must equal the depth
/// after the dive.
pub fn read_object_header(cursor: &mut Cursor<'_>) -> Result<u16, DecodeError> {
    let start = cursor.tell();
    let code = cursor.read_u16_le()?;
    let magic = cursor.read_bytes(layout::HEADER_MAGIC.len())?;
    if magic != layout::HEADER_MAGIC {
        return Err(DecodeError::CorruptHeader {
            offset: start,
            found: magic.to_vec(),
        });
    }
    cursor.dive();

    let marker_offset = cursor.tell();
    let marker = cursor.read_u16_le()?;
    if marker != cursor.depth() {
        return Err(DecodeError::DepthMismatch {
            offset: marker_offset,
            expected: cursor.depth(),
            found: marker,
        });
    }
    trace!(offset = start, code, depth = marker, "object header");
    Ok(code)
}

/// Read an object header and resolve its type code.
pub fn create_object(cursor: &mut Cursor<'_>) -> Result<(ObjectKind, usize), DecodeError> {
    let start = cursor.tell();
    let code = read_object_header(cursor)?;
    let kind = ObjectKind::from_code(code)
        .ok_or(DecodeError::UnknownObjectType { offset: start, code })?;
    Ok((kind, start))
}

/// Object resolved for a line-layer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSlot {
    SimpleLine,
    CartographicLine,
    Symbol,
}

/// Object resolved for a fill-layer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillSlot {
    SimpleFill,
}

/// Resolve an object allowed in a line-layer slot: a line layer or a whole
/// line symbol.
pub fn create_line_layer(cursor: &mut Cursor<'_>) -> Result<LineSlot, DecodeError> {
    let (kind, offset) = create_object(cursor)?;
    match kind {
        ObjectKind::SimpleLineLayer => Ok(LineSlot::SimpleLine),
        ObjectKind::CartographicLineLayer => Ok(LineSlot::CartographicLine),
        ObjectKind::LineSymbol => Ok(LineSlot::Symbol),
        found => Err(DecodeError::TypeMismatch {
            offset,
            expected: "line layer or line symbol",
            found,
        }),
    }
}

/// Resolve an object allowed in a fill-layer slot.
pub fn create_fill_layer(cursor: &mut Cursor<'_>) -> Result<FillSlot, DecodeError> {
    let (kind, offset) = create_object(cursor)?;
    match kind {
        ObjectKind::SimpleFillLayer => Ok(FillSlot::SimpleFill),
        found => Err(DecodeError::TypeMismatch {
            offset,
            expected: "fill layer",
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LineSlot, ObjectKind, create_fill_layer, create_line_layer, create_object,
        read_object_header,
    };
    use crate::blob::cursor::Cursor;
    use crate::blob::layout;
    use crate::error::DecodeError;

    fn header(code: u16, depth: u16) -> Vec<u8> {
        let mut bytes = code.to_le_bytes().to_vec();
        bytes.extend_from_slice(&layout::HEADER_MAGIC);
        bytes.extend_from_slice(&depth.to_le_bytes());
        bytes
    }

    #[test]
    fn header_dives_and_returns_code() {
        let bytes = header(layout::LINE_SYMBOL_CODE, 2);
        let mut cursor = Cursor::new(&bytes);
        let code = read_object_header(&mut cursor).unwrap();
        assert_eq!(code, layout::LINE_SYMBOL_CODE);
        assert_eq!(cursor.depth(), 2);
        assert_eq!(cursor.tell(), layout::HEADER_LEN + layout::DEPTH_MARKER_LEN);
    }

    #[test]
    fn type_codes_are_little_endian_on_the_wire() {
        let bytes = header(layout::FILL_SYMBOL_CODE, 2);
        assert_eq!(&bytes[..2], &[0x04, 0xe6]);
    }

    #[test]
    fn every_magic_byte_is_checked() {
        for index in 0..layout::HEADER_MAGIC.len() {
            let mut bytes = vec![0u8; 4];
            bytes.extend_from_slice(&header(layout::LINE_SYMBOL_CODE, 2));
            bytes[4 + layout::TYPE_CODE_LEN + index] ^= 0xff;
            let mut cursor = Cursor::new(&bytes);
            cursor.skip(4).unwrap();
            let err = read_object_header(&mut cursor).unwrap_err();
            assert!(
                matches!(err, DecodeError::CorruptHeader { offset: 4, .. }),
                "byte {index}: {err:?}"
            );
        }
    }

    #[test]
    fn depth_marker_must_match_post_dive_depth() {
        let bytes = header(layout::LINE_SYMBOL_CODE, 1);
        let mut cursor = Cursor::new(&bytes);
        let err = read_object_header(&mut cursor).unwrap_err();
        assert_eq!(
            err,
            DecodeError::DepthMismatch {
                offset: layout::HEADER_LEN,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn unknown_code_is_rejected() {
        let bytes = header(0x1234, 2);
        let mut cursor = Cursor::new(&bytes);
        let err = create_object(&mut cursor).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownObjectType {
                offset: 0,
                code: 0x1234,
            }
        );
    }

    #[test]
    fn codes_round_trip_through_table() {
        for kind in [
            ObjectKind::FillSymbol,
            ObjectKind::MarkerSymbol,
            ObjectKind::LineSymbol,
            ObjectKind::SimpleLineLayer,
            ObjectKind::CartographicLineLayer,
            ObjectKind::SimpleFillLayer,
        ] {
            assert_eq!(ObjectKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn line_slot_accepts_line_symbol_but_not_fill_layer() {
        let bytes = header(layout::LINE_SYMBOL_CODE, 2);
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(create_line_layer(&mut cursor).unwrap(), LineSlot::Symbol);

        let bytes = header(layout::SIMPLE_FILL_LAYER_CODE, 2);
        let mut cursor = Cursor::new(&bytes);
        let err = create_line_layer(&mut cursor).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch {
                found: ObjectKind::SimpleFillLayer,
                ..
            }
        ));
    }

    #[test]
    fn fill_slot_rejects_line_layers() {
        let bytes = header(layout::SIMPLE_LINE_LAYER_CODE, 2);
        let mut cursor = Cursor::new(&bytes);
        let err = create_fill_layer(&mut cursor).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { offset: 0, .. }));
    }
}
