//! Input handling: container extraction interface and the stream parser.

pub mod container;
pub mod olb;
