mod error;
mod params;
mod snapshot;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use params::{
    canonical_name, validate_value, KNOWN_PARAMETERS, MAX_STRING_LENGTH, PARAM_MAJOR_SEPARATORS,
    PARAM_MAX_LENGTH, PARAM_MINOR_SEPARATORS, PARAM_MIN_LENGTH, PARAM_STOP_WORDS, STORE_DEFAULTS,
};
pub use snapshot::{SeparatorSet, TokenizerConfig, TokenizerConfigBuilder};
