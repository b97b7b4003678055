//! Records placed on schematic pages: wires, instances, annotations.

use super::properties::SymbolDisplayProp;
use super::Record;
use crate::geometry::GeometryPrimitive;
use crate::types::{Color, LineStyle, LineWidth, Rotation};

/// A scalar (single-net) wire segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireScalar {
    pub db_id: u32,
    pub color: Color,
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
    /// Nested records (aliases and display properties attached to the wire).
    pub children: Vec<Record>,
    pub line_width: LineWidth,
    pub line_style: LineStyle,
}

/// A bus wire segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireBus {
    pub db_id: u32,
    pub color: Color,
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
    pub line_width: LineWidth,
    pub line_style: LineStyle,
}

/// A placed part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartInst {
    /// Library part the instance refers to.
    pub name: String,
    pub ref_des: String,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    pub display_props: Vec<SymbolDisplayProp>,
}

/// A net alias placed on a wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub loc_x: i32,
    pub loc_y: i32,
    pub color: Color,
    pub rotation: Rotation,
    pub text_font_idx: u32,
    pub name: String,
}

/// A plain drawn box on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicBoxInst {
    pub db_id: u32,
    pub loc_x: i32,
    pub loc_y: i32,
    pub x2: i32,
    pub y2: i32,
    pub color: Color,
}

/// A placed comment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicCommentTextInst {
    pub db_id: u32,
    pub loc_x: i32,
    pub loc_y: i32,
    pub text_font_idx: u16,
    pub text: String,
}

/// The short diagonal stub joining a wire to a bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusEntry {
    pub color: Color,
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

/// Unidentified record with tag 0x10.  Body is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct T0x10;

/// Unidentified record with tag 0x1f.  Carries part naming strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct T0x1f {
    pub name: String,
    pub unknown1: String,
    pub ref_des: String,
    pub unknown2: String,
    pub pcb_footprint: String,
}

/// Unidentified page-level record holding a primitive list.
///
/// Its trailing region is ambiguous: an 8-byte coordinate pair when exactly
/// eight bytes remain before the next checkpoint, otherwise an opaque skip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SthInPages0 {
    pub primitives: Vec<GeometryPrimitive>,
    /// Coordinate tail, when the 8-byte form was present.
    pub tail: Option<(i32, i32)>,
}
