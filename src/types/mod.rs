//! The enum catalogue of the stream format.
//!
//! Every small integer the format stores is mapped through a total
//! conversion to a named variant; values outside the observed tables fail
//! with [`OlbError::UnknownEnumValue`] (or [`OlbError::UnknownStructure`]
//! for record tags) instead of silently defaulting.
//!
//! [`OlbError::UnknownEnumValue`]: crate::error::OlbError::UnknownEnumValue
//! [`OlbError::UnknownStructure`]: crate::error::OlbError::UnknownStructure

mod color;
mod component;
mod pin;
mod primitive;
mod structure;
mod style;
mod version;

pub use color::Color;
pub use component::{ComponentType, ImplementationType};
pub use pin::{PinShape, PortType, Rotation};
pub use primitive::{GeometryStructure, Primitive};
pub use structure::Structure;
pub use style::{FillStyle, HatchStyle, LineStyle, LineWidth};
pub use version::{FileFormatVersion, FileType};
