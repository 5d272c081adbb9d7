//! Symbol blob decoding.
//!
//! The grammar is split the same way for every object family:
//! - `layout`: magic constants, type codes, terminators, and skip widths
//! - `cursor`: position/depth tracking and safe primitive reads
//! - `header`: object headers and the type-code dispatch table
//! - `line` / `fill`: per-variant field layouts
//! - `parser`: the entry point and grammar shared by all symbols
//!
//! Decoding is pure and synchronous: one cursor per blob, no I/O.

pub mod cursor;
pub mod header;
pub mod layout;

mod fill;
mod line;
mod parser;

#[cfg(test)]
mod fixtures;

pub use cursor::Cursor;
pub use header::ObjectKind;
pub use parser::decode_symbol;
