use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Which separator family closed a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Sub-token bounded by minor separators
    Minor,
    /// Whole segment bounded by major separators, interior minor separators included
    Major,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Minor => write!(f, "minor"),
            TokenKind::Major => write!(f, "major"),
        }
    }
}

/// A token that survived the length gate and the stop-word filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission<'t> {
    /// Token bytes, already truncated to `max_length`
    pub text: &'t [u8],
    pub kind: TokenKind,
    /// Byte offset of the span in the input
    pub offset: usize,
    /// Width of the span before truncation
    pub span_len: usize,
}

impl<'t> Emission<'t> {
    pub fn is_truncated(&self) -> bool {
        self.text.len() < self.span_len
    }

    /// Token text; a multi-byte character cut by truncation becomes U+FFFD
    pub fn to_str_lossy(&self) -> Cow<'t, str> {
        String::from_utf8_lossy(self.text)
    }
}
