use std::collections::{BTreeMap, HashSet};

use super::params::{
    parse_length, parse_max_length, MAX_STRING_LENGTH, PARAM_MAJOR_SEPARATORS, PARAM_MAX_LENGTH,
    PARAM_MINOR_SEPARATORS, PARAM_MIN_LENGTH, PARAM_STOP_WORDS,
};
use super::ConfigError;

/// A small set of single-byte separators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorSet(Vec<u8>);

impl SeparatorSet {
    pub fn new(separators: impl AsRef<[u8]>) -> Self {
        let mut bytes = Vec::new();
        for &b in separators.as_ref() {
            if !bytes.contains(&b) {
                bytes.push(b);
            }
        }
        Self(bytes)
    }

    /// Linear membership test; the alphabet is tiny
    pub fn contains(&self, byte: u8) -> bool {
        self.0.contains(&byte)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Immutable tokenizer settings, loaded once per processing instance
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    major_separators: SeparatorSet,
    minor_separators: SeparatorSet,
    /// Stored lower-cased
    stop_words: HashSet<Vec<u8>>,
    min_length: usize,
    max_length: usize,
}

impl TokenizerConfig {
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::new()
    }

    /// Build a snapshot from persisted `name -> value` pairs
    ///
    /// Absent keys keep the built-in defaults. Unknown keys are ignored.
    pub fn from_parameters(parameters: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut builder = TokenizerConfigBuilder::new();

        for (name, value) in parameters {
            log::debug!("parameter {} = {:?}", name, value);
            builder = match name.as_str() {
                PARAM_STOP_WORDS => builder.stop_words(value.split(',')),
                PARAM_MINOR_SEPARATORS => builder.minor_separators(value),
                PARAM_MAJOR_SEPARATORS => builder.major_separators(value),
                PARAM_MIN_LENGTH => builder.min_length(parse_length(name, value)?),
                PARAM_MAX_LENGTH => builder.max_length(parse_max_length(value)?),
                other => {
                    log::warn!("ignoring unknown parameter '{}'", other);
                    builder
                }
            };
        }

        builder.build()
    }

    pub fn major_separators(&self) -> &SeparatorSet {
        &self.major_separators
    }

    pub fn minor_separators(&self) -> &SeparatorSet {
        &self.minor_separators
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// ASCII case-insensitive lookup of an (already truncated) token
    pub fn is_stop_word(&self, token: &[u8]) -> bool {
        if token.is_empty() || self.stop_words.is_empty() {
            return false;
        }
        self.stop_words.contains(&token.to_ascii_lowercase())
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            major_separators: SeparatorSet::default(),
            minor_separators: SeparatorSet::default(),
            stop_words: HashSet::new(),
            min_length: 0,
            max_length: MAX_STRING_LENGTH,
        }
    }
}

/// Builder for [`TokenizerConfig`]; validation happens in [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct TokenizerConfigBuilder {
    major_separators: SeparatorSet,
    minor_separators: SeparatorSet,
    stop_words: HashSet<Vec<u8>>,
    min_length: usize,
    max_length: usize,
}

impl TokenizerConfigBuilder {
    pub fn new() -> Self {
        let defaults = TokenizerConfig::default();
        Self {
            major_separators: defaults.major_separators,
            minor_separators: defaults.minor_separators,
            stop_words: defaults.stop_words,
            min_length: defaults.min_length,
            max_length: defaults.max_length,
        }
    }

    pub fn major_separators(mut self, separators: impl AsRef<[u8]>) -> Self {
        self.major_separators = SeparatorSet::new(separators);
        self
    }

    pub fn minor_separators(mut self, separators: impl AsRef<[u8]>) -> Self {
        self.minor_separators = SeparatorSet::new(separators);
        self
    }

    /// Replace the stop-word list; empty entries are skipped
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.stop_words = words
            .into_iter()
            .filter(|w| !w.as_ref().is_empty())
            .map(|w| w.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn build(self) -> Result<TokenizerConfig, ConfigError> {
        if self.max_length == 0 {
            return Err(ConfigError::NonPositiveMaxLength);
        }

        Ok(TokenizerConfig {
            major_separators: self.major_separators,
            minor_separators: self.minor_separators,
            stop_words: self.stop_words,
            min_length: self.min_length,
            max_length: self.max_length,
        })
    }
}

impl Default for TokenizerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
