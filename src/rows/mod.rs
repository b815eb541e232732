mod emitter;
mod error;
mod jsonl;
mod layout;


pub use emitter::{OutputRow, PartitionStats, RowSink, TokenizeFunction};
pub use error::RowError;
pub use jsonl::{JsonLinesReader, JsonLinesWriter};
pub use layout::RowLayout;

/// One row of column values
pub type Row = Vec<serde_json::Value>;
