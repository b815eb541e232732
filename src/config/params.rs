use super::ConfigError;

pub const PARAM_STOP_WORDS: &str = "stopwordscaseinsensitive";
pub const PARAM_MINOR_SEPARATORS: &str = "minorseparators";
pub const PARAM_MAJOR_SEPARATORS: &str = "majorseparators";
pub const PARAM_MIN_LENGTH: &str = "minlength";
pub const PARAM_MAX_LENGTH: &str = "maxlength";

/// Every parameter name the store accepts
pub const KNOWN_PARAMETERS: [&str; 5] = [
    PARAM_STOP_WORDS,
    PARAM_MINOR_SEPARATORS,
    PARAM_MAJOR_SEPARATORS,
    PARAM_MIN_LENGTH,
    PARAM_MAX_LENGTH,
];

/// Widest token the engine emits when `maxlength` is never configured
pub const MAX_STRING_LENGTH: usize = 65_000;

/// Values written into a freshly created parameter store
pub const STORE_DEFAULTS: [(&str, &str); 5] = [
    (PARAM_STOP_WORDS, ""),
    (PARAM_MINOR_SEPARATORS, "/:=@.-$#%\\_"),
    (PARAM_MAJOR_SEPARATORS, " []<>(){}|!;,'\"*&?+\r\n\t"),
    (PARAM_MIN_LENGTH, "2"),
    (PARAM_MAX_LENGTH, "128"),
];

/// Lower-case a user supplied parameter name and map it onto a known one
pub fn canonical_name(raw: &str) -> Result<&'static str, ConfigError> {
    let lowered = raw.to_ascii_lowercase();
    KNOWN_PARAMETERS
        .iter()
        .copied()
        .find(|known| *known == lowered)
        .ok_or(ConfigError::UnknownParameter(lowered))
}

/// Check a value before it is persisted; only the numeric bounds carry rules
pub fn validate_value(name: &str, value: &str) -> Result<(), ConfigError> {
    match name {
        PARAM_MIN_LENGTH => parse_length(name, value).map(|_| ()),
        PARAM_MAX_LENGTH => parse_max_length(value).map(|_| ()),
        _ => Ok(()),
    }
}

pub(crate) fn parse_length(name: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidNumber {
            param: name.to_string(),
            value: value.to_string(),
        })
}

pub(crate) fn parse_max_length(value: &str) -> Result<usize, ConfigError> {
    match parse_length(PARAM_MAX_LENGTH, value)? {
        0 => Err(ConfigError::NonPositiveMaxLength),
        n => Ok(n),
    }
}
