//! Blob loading from disk.
//!
//! Blobs are stored either as raw bytes or as ASCII hex text (the form they
//! take when copied out of a style database). All file access for the crate
//! lives here; the decoder itself only sees byte slices.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::DecodeError;

/// On-disk encoding of a blob file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlobEncoding {
    #[default]
    Raw,
    Hex,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Read a blob file and return its bytes.
///
/// # Errors
/// Returns `SourceError::Io` when the file cannot be read and
/// `SourceError::InvalidHex` when hex text is malformed.
pub fn load_blob(path: &Path, encoding: BlobEncoding) -> Result<Vec<u8>, SourceError> {
    let bytes = fs::read(path)?;
    match encoding {
        BlobEncoding::Raw => Ok(bytes),
        BlobEncoding::Hex => decode_hex(&String::from_utf8_lossy(&bytes)),
    }
}

/// Decode hex text, ignoring ASCII whitespace.
///
/// # Examples
/// ```
/// use symblob_core::decode_hex;
///
/// assert_eq!(decode_hex("0d 02\nff").unwrap(), vec![0x0d, 0x02, 0xff]);
/// assert!(decode_hex("0d0").is_err());
/// ```
pub fn decode_hex(text: &str) -> Result<Vec<u8>, SourceError> {
    let digits: String = text.chars().filter(|ch| !ch.is_ascii_whitespace()).collect();
    Ok(hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use hex::FromHexError;

    use super::{SourceError, decode_hex};

    #[test]
    fn decodes_mixed_case_and_whitespace() {
        assert_eq!(decode_hex("fA e5\t14\r\n").unwrap(), vec![0xfa, 0xe5, 0x14]);
    }

    #[test]
    fn character_index_ignores_whitespace() {
        let err = decode_hex("0d 0z").unwrap_err();
        assert!(matches!(
            err,
            SourceError::InvalidHex(FromHexError::InvalidHexCharacter { c: 'z', index: 3 })
        ));
    }

    #[test]
    fn empty_text_is_empty_blob() {
        assert!(decode_hex("  \n").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_hex_digit() {
        let err = decode_hex("0g").unwrap_err();
        assert!(matches!(
            err,
            SourceError::InvalidHex(FromHexError::InvalidHexCharacter { c: 'g', index: 1 })
        ));
    }

    #[test]
    fn rejects_odd_digit_count() {
        let err = decode_hex("abc").unwrap_err();
        assert!(matches!(err, SourceError::InvalidHex(FromHexError::OddLength)));
        assert!(err.to_string().starts_with("invalid hex input"));
    }
}
