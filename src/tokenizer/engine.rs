use std::iter::FusedIterator;

use super::emission::{Emission, TokenKind};
use super::latch::Latch;
use crate::config::TokenizerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    Content,
    Minor,
    Major,
}

/// Tokenize one text value; `None` (a null value) yields nothing
pub fn tokenize<'t, 'c>(text: Option<&'t [u8]>, config: &'c TokenizerConfig) -> Tokens<'t, 'c> {
    Tokens::new(text.unwrap_or_default(), config)
}

/// Lazy single-pass scan over one text value
///
/// Minor tokens of a segment come out left to right as their closing
/// separators are reached; the enclosing major token follows the segment's
/// last minor token. Scan state lives here and dies with the iterator, so
/// nothing leaks from one input value into the next.
#[derive(Debug, Clone)]
pub struct Tokens<'t, 'c> {
    text: &'t [u8],
    config: &'c TokenizerConfig,
    /// Start of the current major segment
    word_start: usize,
    /// Start of the current minor sub-token
    word_minor_start: usize,
    /// Scan cursor
    word_end: usize,
    /// At least one byte of the text is neither a major nor a minor separator
    has_content: bool,
    major_latch: Latch,
    minor_latch: Latch,
    /// Major token closed in the same step as a minor one
    pending: Option<Emission<'t>>,
}

impl<'t, 'c> Tokens<'t, 'c> {
    fn new(text: &'t [u8], config: &'c TokenizerConfig) -> Self {
        let has_content = text.iter().any(|&b| {
            !config.major_separators().contains(b) && !config.minor_separators().contains(b)
        });

        Self {
            text,
            config,
            word_start: 0,
            word_minor_start: 0,
            word_end: 0,
            has_content,
            major_latch: Latch::default(),
            minor_latch: Latch::default(),
            pending: None,
        }
    }

    /// Classify the byte under the cursor and update the latches.
    ///
    /// Classification stops at the first class that matches, so a major
    /// separator leaves the minor latch untouched.
    fn examine(&mut self, byte: u8) -> ByteClass {
        if self.config.major_separators().contains(byte) {
            return ByteClass::Major;
        }
        self.major_latch.disarm();

        if self.config.minor_separators().contains(byte) {
            return ByteClass::Minor;
        }
        self.minor_latch.disarm();

        ByteClass::Content
    }

    /// Run one scan step: advance to the next separator (or the end) and
    /// close whatever tokens it bounds.
    fn step(&mut self) -> (Option<Emission<'t>>, Option<Emission<'t>>) {
        let len = self.text.len();

        let mut boundary = ByteClass::Content;
        while self.word_end < len {
            boundary = self.examine(self.text[self.word_end]);
            if boundary != ByteClass::Content {
                break;
            }
            self.word_end += 1;
        }

        // A minor sub-token closes at a minor separator, or at a major
        // boundary once the segment has already been split.
        let mut minor = None;
        if boundary == ByteClass::Minor || self.word_minor_start != self.word_start {
            if !self.major_latch.is_armed() && !self.minor_latch.is_armed() {
                minor = self.candidate(self.word_minor_start, self.word_end, TokenKind::Minor);
            }
            self.word_minor_start = self.word_end + 1;
            self.minor_latch.arm();
        }

        let mut major = None;
        if boundary == ByteClass::Major || self.word_end == len || self.word_minor_start == len {
            // text ends in a minor separator: keep it inside the major span
            if boundary != ByteClass::Major && self.word_minor_start == len {
                self.word_end += 1;
            }
            if !self.major_latch.is_armed() {
                major = self.candidate(self.word_start, self.word_end, TokenKind::Major);
            }
            self.word_start = self.word_end + 1;
            self.word_minor_start = self.word_start;
            self.major_latch.arm();
        }

        self.word_end += 1;
        (minor, major)
    }

    /// Apply the length gate, truncation and the stop-word filter to a span
    fn candidate(&self, start: usize, end: usize, kind: TokenKind) -> Option<Emission<'t>> {
        let span_len = end - start;
        if span_len == 0 || span_len < self.config.min_length() {
            return None;
        }

        let text: &'t [u8] = self.text;
        let token = &text[start..start + span_len.min(self.config.max_length())];
        if self.config.is_stop_word(token) {
            return None;
        }

        Some(Emission {
            text: token,
            kind,
            offset: start,
            span_len,
        })
    }
}

impl<'t, 'c> Iterator for Tokens<'t, 'c> {
    type Item = Emission<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(emission) = self.pending.take() {
            return Some(emission);
        }

        // a text made only of separators yields nothing
        if !self.has_content {
            return None;
        }

        while self.word_end < self.text.len() {
            match self.step() {
                (Some(minor), major) => {
                    self.pending = major;
                    return Some(minor);
                }
                (None, Some(major)) => return Some(major),
                (None, None) => {}
            }
        }

        None
    }
}

impl FusedIterator for Tokens<'_, '_> {}
