//! Decoded symbol graph.
//!
//! Everything here is built in a single decode pass and never mutated
//! afterwards. Layer order is decode order, which is also rendering order.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorModel};

/// Top-level style entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Symbol {
    Fill(FillSymbol),
    Line(LineSymbol),
    Marker(MarkerSymbol),
}

impl Symbol {
    /// Layers of the symbol; marker symbols expose none.
    pub fn layers(&self) -> &[Layer] {
        match self {
            Symbol::Fill(symbol) => &symbol.layers,
            Symbol::Line(symbol) => &symbol.layers,
            Symbol::Marker(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSymbol {
    pub layers: Vec<Layer>,
}

/// Fill symbol.
///
/// `color_model` is the model tag of the black sentinel color that precedes
/// the layer list; the color itself carries no information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillSymbol {
    pub color_model: ColorModel,
    pub layers: Vec<Layer>,
}

/// Marker symbol. Its body is not decoded; the bytes after the symbol
/// prologue are kept as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkerSymbol {
    pub raw: Vec<u8>,
}

/// One rendering pass within a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub enabled: bool,
    pub locked: bool,
    pub kind: LayerKind,
}

impl Layer {
    pub fn new(kind: LayerKind) -> Self {
        Self {
            enabled: true,
            locked: false,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerKind {
    SimpleLine(SimpleLineLayer),
    CartographicLine(CartographicLineLayer),
    SimpleFill(SimpleFillLayer),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleLineLayer {
    pub color_model: ColorModel,
    pub color: Color,
    pub width: f64,
    pub line_type: LineType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartographicLineLayer {
    pub color_model: ColorModel,
    pub color: Color,
    pub width: f64,
    pub offset: f64,
    pub cap: CapStyle,
    pub join: JoinStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleFillLayer {
    pub color_model: ColorModel,
    pub color: Color,
    pub outline: Outline,
}

/// Outline of a fill layer: a single line layer or a whole line symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outline {
    Layer(Box<Layer>),
    Symbol(Box<LineSymbol>),
}

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    Solid,
    Dashed,
    Dotted,
    DashDot,
    DashDotDot,
    Null,
}

impl LineType {
    pub fn from_raw(value: u32) -> Option<Self> {
        match value {
            0 => Some(LineType::Solid),
            1 => Some(LineType::Dashed),
            2 => Some(LineType::Dotted),
            3 => Some(LineType::DashDot),
            4 => Some(LineType::DashDotDot),
            5 => Some(LineType::Null),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapStyle {
    Butt,
    Round,
    Square,
}

impl CapStyle {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(CapStyle::Butt),
            1 => Some(CapStyle::Round),
            2 => Some(CapStyle::Square),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStyle {
    Miter,
    Round,
    Bevel,
}

impl JoinStyle {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(JoinStyle::Miter),
            1 => Some(JoinStyle::Round),
            2 => Some(JoinStyle::Bevel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CapStyle, JoinStyle, LineType};

    #[test]
    fn line_type_table() {
        assert_eq!(LineType::from_raw(0), Some(LineType::Solid));
        assert_eq!(LineType::from_raw(3), Some(LineType::DashDot));
        assert_eq!(LineType::from_raw(5), Some(LineType::Null));
        assert_eq!(LineType::from_raw(6), None);
    }

    #[test]
    fn cap_and_join_tables() {
        assert_eq!(CapStyle::from_raw(2), Some(CapStyle::Square));
        assert_eq!(CapStyle::from_raw(3), None);
        assert_eq!(JoinStyle::from_raw(0), Some(JoinStyle::Miter));
        assert_eq!(JoinStyle::from_raw(9), None);
    }
}
