// Public API exports
pub mod commands;
pub mod config;
pub mod rows;
pub mod store;
pub mod tokenizer;

// Re-export main types for convenience
pub use config::{ConfigError, SeparatorSet, TokenizerConfig, TokenizerConfigBuilder};
pub use tokenizer::{tokenize, Emission, TokenKind, Tokens};

pub use rows::{
    JsonLinesReader, JsonLinesWriter, OutputRow, PartitionStats, Row, RowError, RowLayout,
    RowSink, TokenizeFunction,
};

pub use store::{decode_records, encode_records, Parameter, ParameterStore};
