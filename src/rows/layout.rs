use std::ops::Range;

use super::RowError;

/// Where the text value sits in an input row and how wide rows are
///
/// Columns after the text column are passed through; columns before it are
/// not copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    text_column: usize,
    width: usize,
}

impl RowLayout {
    /// Fails when rows this wide cannot hold the text column
    pub fn new(text_column: usize, width: usize) -> Result<Self, RowError> {
        if width <= text_column {
            return Err(RowError::TooFewColumns {
                required: text_column + 1,
                actual: width,
            });
        }
        Ok(Self { text_column, width })
    }

    pub fn text_column(&self) -> usize {
        self.text_column
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn passthrough(&self) -> Range<usize> {
        self.text_column + 1..self.width
    }

    pub fn passthrough_count(&self) -> usize {
        self.width - self.text_column - 1
    }
}
