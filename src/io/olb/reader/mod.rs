//! Stream reading: record readers, stream dispatchers, orchestrator.

pub mod olb_reader;
pub mod record_reader;
pub mod stream_reader;

pub use olb_reader::{OlbParser, ParseOutcome, ParseReport, ParserConfiguration, StreamFailure};
pub use record_reader::{RecordReader, TypePrefix};
