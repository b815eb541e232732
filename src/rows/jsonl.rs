use serde_json::Value;
use std::io::{BufRead, Lines, Write};

use super::{OutputRow, Row, RowError, RowSink};

/// Reads one JSON array of column values per line; blank lines are skipped
pub struct JsonLinesReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> JsonLinesReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for JsonLinesReader<R> {
    type Item = Result<Row, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }
            return Some(parse_row(self.line, &text));
        }
    }
}

fn parse_row(line: usize, text: &str) -> Result<Row, RowError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(values)) => Ok(values),
        Ok(_) => Err(RowError::Malformed { line, source: None }),
        Err(e) => Err(RowError::Malformed {
            line,
            source: Some(e),
        }),
    }
}

/// Writes each output row as a JSON array on its own line
pub struct JsonLinesWriter<W: Write> {
    writer: W,
    with_kind: bool,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(writer: W, with_kind: bool) -> Self {
        Self { writer, with_kind }
    }

    pub fn flush(&mut self) -> Result<(), RowError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RowSink for JsonLinesWriter<W> {
    fn write_row(&mut self, row: &OutputRow<'_>) -> Result<(), RowError> {
        serde_json::to_writer(&mut self.writer, &row.to_values(self.with_kind))?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
