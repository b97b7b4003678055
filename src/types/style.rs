//! Line, fill and hatch style attributes carried by geometry primitives.

use crate::error::{OlbError, Result};

/// Stroke pattern of a drawn edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    Default,
}

impl LineStyle {
    pub fn from_raw(raw: u32, offset: u64) -> Result<Self> {
        Ok(match raw {
            0 => Self::Solid,
            1 => Self::Dash,
            2 => Self::Dot,
            3 => Self::DashDot,
            4 => Self::DashDotDot,
            5 => Self::Default,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "LineStyle",
                    raw,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u32 {
        match self {
            Self::Solid => 0,
            Self::Dash => 1,
            Self::Dot => 2,
            Self::DashDot => 3,
            Self::DashDotDot => 4,
            Self::Default => 5,
        }
    }
}

/// Stroke width class of a drawn edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineWidth {
    Thin,
    Medium,
    Wide,
    Default,
}

impl Default for LineWidth {
    fn default() -> Self {
        Self::Default
    }
}

impl LineWidth {
    pub fn from_raw(raw: u32, offset: u64) -> Result<Self> {
        Ok(match raw {
            0 => Self::Thin,
            1 => Self::Medium,
            2 => Self::Wide,
            3 => Self::Default,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "LineWidth",
                    raw,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u32 {
        match self {
            Self::Thin => 0,
            Self::Medium => 1,
            Self::Wide => 2,
            Self::Default => 3,
        }
    }
}

/// Interior fill of a closed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    #[default]
    None,
    Solid,
    Hatched,
}

impl FillStyle {
    pub fn from_raw(raw: u32, offset: u64) -> Result<Self> {
        Ok(match raw {
            0 => Self::None,
            1 => Self::Solid,
            2 => Self::Hatched,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "FillStyle",
                    raw,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Solid => 1,
            Self::Hatched => 2,
        }
    }
}

/// Hatch pattern used when [`FillStyle::Hatched`] applies.
///
/// `NotValid` is stored when the shape carries no meaningful hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HatchStyle {
    #[default]
    NotValid,
    LinesHorizontal,
    LinesVertical,
    DiagonalLeft,
    DiagonalRight,
    Checkerboard,
    Mesh,
}

impl HatchStyle {
    pub fn from_raw(raw: i32, offset: u64) -> Result<Self> {
        Ok(match raw {
            -1 => Self::NotValid,
            0 => Self::LinesHorizontal,
            1 => Self::LinesVertical,
            2 => Self::DiagonalLeft,
            3 => Self::DiagonalRight,
            4 => Self::Checkerboard,
            5 => Self::Mesh,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "HatchStyle",
                    raw: raw as u32,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> i32 {
        match self {
            Self::NotValid => -1,
            Self::LinesHorizontal => 0,
            Self::LinesVertical => 1,
            Self::DiagonalLeft => 2,
            Self::DiagonalRight => 3,
            Self::Checkerboard => 4,
            Self::Mesh => 5,
        }
    }
}
