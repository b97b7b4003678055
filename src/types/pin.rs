//! Pin and port attribute enums.

use crate::error::{OlbError, Result};

/// Electrical class of a port or pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortType {
    Input,
    Bidirectional,
    Output,
    OpenCollector,
    Passive,
    ThreeState,
    OpenEmitter,
    Power,
}

impl PortType {
    pub fn from_raw(raw: u32, offset: u64) -> Result<Self> {
        Ok(match raw {
            0 => Self::Input,
            1 => Self::Bidirectional,
            2 => Self::Output,
            3 => Self::OpenCollector,
            4 => Self::Passive,
            5 => Self::ThreeState,
            6 => Self::OpenEmitter,
            7 => Self::Power,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "PortType",
                    raw,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u32 {
        match self {
            Self::Input => 0,
            Self::Bidirectional => 1,
            Self::Output => 2,
            Self::OpenCollector => 3,
            Self::Passive => 4,
            Self::ThreeState => 5,
            Self::OpenEmitter => 6,
            Self::Power => 7,
        }
    }
}

/// Drawn shape of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinShape {
    Line,
    Clock,
    Dot,
    ClockDot,
    Short,
    ShortClock,
    ShortDot,
    ShortClockDot,
    ZeroLength,
}

impl PinShape {
    pub fn from_raw(raw: u16, offset: u64) -> Result<Self> {
        Ok(match raw {
            0 => Self::Line,
            1 => Self::Clock,
            2 => Self::Dot,
            3 => Self::ClockDot,
            4 => Self::Short,
            5 => Self::ShortClock,
            6 => Self::ShortDot,
            7 => Self::ShortClockDot,
            8 => Self::ZeroLength,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "PinShape",
                    raw: raw as u32,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u16 {
        match self {
            Self::Line => 0,
            Self::Clock => 1,
            Self::Dot => 2,
            Self::ClockDot => 3,
            Self::Short => 4,
            Self::ShortClock => 5,
            Self::ShortDot => 6,
            Self::ShortClockDot => 7,
            Self::ZeroLength => 8,
        }
    }
}

/// Quarter-turn rotation of displayed text or instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn from_raw(raw: u32, offset: u64) -> Result<Self> {
        Ok(match raw {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            3 => Self::Deg270,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "Rotation",
                    raw,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Rotation in degrees.
    pub fn degrees(self) -> u16 {
        self.to_raw() as u16 * 90
    }
}
