//! Decoder for binary vector-symbol blobs.
//!
//! A blob holds one fill, line, or marker symbol written by a desktop GIS
//! styling tool. The format is undocumented: every magic constant, padding
//! run, and terminator byte in `blob::layout` was recovered from real data
//! and is checked exactly. Decoding is a single synchronous pass over a byte
//! slice; the result is an immutable [`Symbol`] graph ready for conversion
//! to other styling formats.
//!
//! Layering:
//! - `blob`: cursor, object headers, type dispatch, per-variant grammars
//! - `color`: the color collaborator behind the [`ColorReader`] trait
//! - `model`: decoded symbols and layers (serde-serializable)
//! - `source`: the only module that touches the filesystem
//!
//! Invariants:
//! - A decode either returns a complete symbol or a single [`DecodeError`];
//!   there are no partial results.
//! - Layer order is stream order; enabled/locked flags are applied after all
//!   layers of a symbol are read, positionally.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use symblob_core::{BlobEncoding, decode_file};
//!
//! let report = decode_file(Path::new("symbol.bin"), BlobEncoding::Raw)?;
//! println!("layers: {}", report.symbol.layers().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

mod blob;
mod color;
mod error;
mod model;
mod source;

pub use blob::{Cursor, ObjectKind, layout};
pub use color::{Color, ColorModel, ColorReader, LabColorReader};
pub use error::DecodeError;
pub use model::{
    CapStyle, CartographicLineLayer, FillSymbol, JoinStyle, Layer, LayerKind, LineSymbol,
    LineType, MarkerSymbol, Outline, SimpleFillLayer, SimpleLineLayer, Symbol,
};
pub use source::{BlobEncoding, SourceError, decode_hex, load_blob};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Symbol decoder with a pluggable color reader.
///
/// # Examples
/// ```
/// use symblob_core::{DecodeError, Decoder};
///
/// let err = Decoder::new().decode(&[0x04, 0xe6]).unwrap_err();
/// assert!(matches!(err, DecodeError::UnexpectedEndOfStream { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder<C = LabColorReader> {
    colors: C,
}

impl Decoder<LabColorReader> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ColorReader> Decoder<C> {
    pub fn with_color_reader(colors: C) -> Self {
        Self { colors }
    }

    /// Decode one symbol from `data`.
    ///
    /// # Errors
    /// Returns the first grammar violation found; see [`DecodeError`].
    pub fn decode(&self, data: &[u8]) -> Result<Symbol, DecodeError> {
        blob::decode_symbol(data, &self.colors)
    }
}

/// Decode one symbol with the default color reader.
pub fn decode(data: &[u8]) -> Result<Symbol, DecodeError> {
    Decoder::new().decode(data)
}

/// Decoded symbol plus input metadata, as written by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub symbol: Symbol,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Input blob metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Blob size in bytes after any hex decoding.
    pub bytes: u64,
}

/// Build a report around an already decoded symbol.
pub fn make_report(input_path: &str, input_bytes: u64, symbol: Symbol) -> DecodeReport {
    DecodeReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "symblob".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        symbol,
    }
}

/// Load a blob file and decode it.
///
/// # Errors
/// Returns `SourceError` for I/O, hex, or decode failures.
pub fn decode_file(path: &Path, encoding: BlobEncoding) -> Result<DecodeReport, SourceError> {
    let bytes = load_blob(path, encoding)?;
    let symbol = decode(&bytes)?;
    Ok(make_report(
        &path.display().to_string(),
        bytes.len() as u64,
        symbol,
    ))
}
