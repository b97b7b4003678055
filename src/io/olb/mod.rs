//! The stream record parser.
//!
//! `data_stream` and `future_data` are the byte-level substrate; `reader`
//! holds the record readers, the per-stream entry points and the
//! orchestrator.

pub mod data_stream;
pub mod future_data;
pub mod reader;

pub use data_stream::DataStream;
pub use future_data::{FutureData, FutureDataLst};
