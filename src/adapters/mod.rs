//! Adapters - Implementations of port interfaces.
//!
//! - `ingest` - JSON record sources for `AlternativeSource`

pub mod ingest;

pub use ingest::{IngestError, JsonRecordSource};
