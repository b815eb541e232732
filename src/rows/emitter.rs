use serde_json::Value;
use std::borrow::Cow;

use super::{Row, RowError, RowLayout};
use crate::config::TokenizerConfig;
use crate::tokenizer::{tokenize, TokenKind};

/// One output row: the token followed by the source row's pass-through values
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow<'r> {
    pub token: Cow<'r, str>,
    pub kind: TokenKind,
    pub passthrough: &'r [Value],
}

impl OutputRow<'_> {
    /// Flatten into column values, optionally with the token kind after the token
    pub fn to_values(&self, with_kind: bool) -> Row {
        let mut values = Vec::with_capacity(self.passthrough.len() + 2);
        values.push(Value::String(self.token.clone().into_owned()));
        if with_kind {
            values.push(Value::String(self.kind.to_string()));
        }
        values.extend(self.passthrough.iter().cloned());
        values
    }
}

/// Destination for output rows
pub trait RowSink {
    fn write_row(&mut self, row: &OutputRow<'_>) -> Result<(), RowError>;
}

impl RowSink for Vec<Row> {
    fn write_row(&mut self, row: &OutputRow<'_>) -> Result<(), RowError> {
        self.push(row.to_values(false));
        Ok(())
    }
}

/// Counters for one processed partition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionStats {
    pub rows_read: usize,
    pub null_rows: usize,
    pub rows_written: usize,
}

/// A processing instance: owns its configuration snapshot and row layout
#[derive(Debug, Clone)]
pub struct TokenizeFunction {
    config: TokenizerConfig,
    layout: RowLayout,
}

impl TokenizeFunction {
    pub fn new(config: TokenizerConfig, layout: RowLayout) -> Self {
        Self { config, layout }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    /// Tokenize one input row and write one output row per surviving token
    ///
    /// `row_number` is 1-based and only used in error messages. Returns the
    /// number of rows written.
    pub fn process_row<S>(&self, row_number: usize, row: &[Value], sink: &mut S) -> Result<usize, RowError>
    where
        S: RowSink + ?Sized,
    {
        if row.len() != self.layout.width() {
            return Err(RowError::WidthMismatch {
                row: row_number,
                expected: self.layout.width(),
                actual: row.len(),
            });
        }

        let text = match &row[self.layout.text_column()] {
            Value::Null => None,
            Value::String(s) => Some(s.as_bytes()),
            _ => {
                return Err(RowError::NotText {
                    row: row_number,
                    column: self.layout.text_column(),
                })
            }
        };

        let passthrough = &row[self.layout.passthrough()];
        let mut written = 0;
        for emission in tokenize(text, &self.config) {
            sink.write_row(&OutputRow {
                token: emission.to_str_lossy(),
                kind: emission.kind,
                passthrough,
            })?;
            written += 1;
        }

        Ok(written)
    }

    /// Process rows in order until the input ends or an error occurs
    ///
    /// Each row is finished before the next is pulled, so stopping the input
    /// between rows leaves nothing half written.
    pub fn process_partition<I, S>(&self, rows: I, sink: &mut S) -> Result<PartitionStats, RowError>
    where
        I: IntoIterator<Item = Result<Row, RowError>>,
        S: RowSink + ?Sized,
    {
        let mut stats = PartitionStats::default();

        for row in rows {
            let row = row?;
            stats.rows_read += 1;

            if matches!(row.get(self.layout.text_column()), Some(Value::Null)) {
                stats.null_rows += 1;
            }

            stats.rows_written += self.process_row(stats.rows_read, &row, sink)?;
        }

        log::info!(
            "partition done: {} rows read ({} null), {} token rows written",
            stats.rows_read,
            stats.null_rows,
            stats.rows_written
        );

        Ok(stats)
    }
}
