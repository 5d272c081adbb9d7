use thiserror::Error;

use crate::blob::ObjectKind;
use crate::color::Color;

/// Errors returned while decoding a symbol blob.
///
/// Every variant carries the byte offset at which the violation was
/// detected. Header-level errors (`CorruptHeader`, `UnknownObjectType`)
/// report the offset of the start of the 16-byte object header; all other
/// variants report the offset of the offending field.
///
/// None of these are recoverable: a violation leaves the cursor misaligned
/// and the whole decode is aborted.
///
/// # Examples
/// ```
/// use symblob_core::DecodeError;
///
/// let err = DecodeError::UnknownLineType { offset: 0x40, value: 9 };
/// assert!(err.to_string().contains("unknown line type 9"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unexpected end of stream at {offset:#x}: need {needed} bytes, {remaining} remaining")]
    UnexpectedEndOfStream {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("corrupt object header at {offset:#x}: got magic {}", hex::encode(.found))]
    CorruptHeader { offset: usize, found: Vec<u8> },
    #[error("depth marker {found} at {offset:#x}, expected {expected}")]
    DepthMismatch {
        offset: usize,
        expected: u16,
        found: u16,
    },
    #[error("unknown object type {code:#06x} at {offset:#x}")]
    UnknownObjectType { offset: usize, code: u16 },
    #[error("expected {expected} at {offset:#x}, got {found}")]
    TypeMismatch {
        offset: usize,
        expected: &'static str,
        found: ObjectKind,
    },
    #[error("expected a symbol at {offset:#x}, got {found}")]
    ExpectedSymbol { offset: usize, found: ObjectKind },
    #[error("corrupt magic in {context} at {offset:#x}: got {}", hex::encode(.found))]
    CorruptMagic {
        offset: usize,
        context: &'static str,
        found: Vec<u8>,
    },
    #[error(
        "unexpected {context} at {offset:#x}: expected {}, got {}",
        hex::encode(.expected),
        hex::encode(.found)
    )]
    UnexpectedMarker {
        offset: usize,
        context: &'static str,
        expected: Vec<u8>,
        found: Vec<u8>,
    },
    #[error("unknown line type {value} at {offset:#x}")]
    UnknownLineType { offset: usize, value: u32 },
    #[error("unknown cap style {value} at {offset:#x}")]
    UnknownCapStyle { offset: usize, value: u8 },
    #[error("unknown join style {value} at {offset:#x}")]
    UnknownJoinStyle { offset: usize, value: u8 },
    #[error(
        "unexpected {context} terminator at {offset:#x}: expected {expected:#04x}, got {found:#04x}"
    )]
    UnexpectedTerminator {
        offset: usize,
        context: &'static str,
        expected: u8,
        found: u8,
    },
    #[error("unexpected sentinel color at {offset:#x}: {found:?}")]
    UnexpectedSentinelColor { offset: usize, found: Color },
    #[error("unknown color model tag {tag:#04x} at {offset:#x}")]
    UnknownColorModel { offset: usize, tag: u8 },
    #[error("invalid UTF-16 string at {offset:#x}")]
    InvalidUtf16 { offset: usize },
}

impl DecodeError {
    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::UnexpectedEndOfStream { offset, .. }
            | DecodeError::CorruptHeader { offset, .. }
            | DecodeError::DepthMismatch { offset, .. }
            | DecodeError::UnknownObjectType { offset, .. }
            | DecodeError::TypeMismatch { offset, .. }
            | DecodeError::ExpectedSymbol { offset, .. }
            | DecodeError::CorruptMagic { offset, .. }
            | DecodeError::UnexpectedMarker { offset, .. }
            | DecodeError::UnknownLineType { offset, .. }
            | DecodeError::UnknownCapStyle { offset, .. }
            | DecodeError::UnknownJoinStyle { offset, .. }
            | DecodeError::UnexpectedTerminator { offset, .. }
            | DecodeError::UnexpectedSentinelColor { offset, .. }
            | DecodeError::UnknownColorModel { offset, .. }
            | DecodeError::InvalidUtf16 { offset } => *offset,
        }
    }
}
