//! Ingest adapters - load alternatives from external documents.

mod errors;
mod json_record_source;

pub use errors::IngestError;
pub use json_record_source::{JsonRecordSource, DEFAULT_ID_FIELD};
