use super::*;
use std::collections::BTreeMap;

fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_empty_parameters_keep_engine_defaults() {
    let config = TokenizerConfig::from_parameters(&BTreeMap::new()).unwrap();

    assert!(config.major_separators().is_empty());
    assert!(config.minor_separators().is_empty());
    assert_eq!(config.min_length(), 0);
    assert_eq!(config.max_length(), MAX_STRING_LENGTH);
    assert_eq!(config.stop_word_count(), 0);
}

#[test]
fn test_all_parameters_applied() {
    let config = TokenizerConfig::from_parameters(&params(&[
        (PARAM_STOP_WORDS, "the,a,,An"),
        (PARAM_MINOR_SEPARATORS, "@."),
        (PARAM_MAJOR_SEPARATORS, " \t"),
        (PARAM_MIN_LENGTH, "2"),
        (PARAM_MAX_LENGTH, "16"),
    ]))
    .unwrap();

    assert_eq!(config.major_separators().as_bytes(), b" \t");
    assert_eq!(config.minor_separators().as_bytes(), b"@.");
    assert_eq!(config.min_length(), 2);
    assert_eq!(config.max_length(), 16);
    // the empty entry between the two commas is dropped
    assert_eq!(config.stop_word_count(), 3);
}

#[test]
fn test_store_defaults_parse() {
    let config = TokenizerConfig::from_parameters(&params(&STORE_DEFAULTS)).unwrap();

    assert!(config.major_separators().contains(b' '));
    assert!(config.major_separators().contains(b'\n'));
    assert!(config.minor_separators().contains(b'\\'));
    assert!(config.minor_separators().contains(b'_'));
    assert_eq!(config.min_length(), 2);
    assert_eq!(config.max_length(), 128);
}

#[test]
fn test_unknown_parameter_ignored_on_load() {
    let config =
        TokenizerConfig::from_parameters(&params(&[("colour", "blue"), (PARAM_MIN_LENGTH, "1")]))
            .unwrap();
    assert_eq!(config.min_length(), 1);
}

#[test]
fn test_invalid_min_length_is_fatal() {
    let err = TokenizerConfig::from_parameters(&params(&[(PARAM_MIN_LENGTH, "two")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    assert!(err.to_string().contains("minlength"));
}

#[test]
fn test_negative_max_length_is_fatal() {
    let err = TokenizerConfig::from_parameters(&params(&[(PARAM_MAX_LENGTH, "-4")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));
}

#[test]
fn test_zero_max_length_is_fatal() {
    let err = TokenizerConfig::from_parameters(&params(&[(PARAM_MAX_LENGTH, "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveMaxLength));

    let err = TokenizerConfig::builder().max_length(0).build().unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveMaxLength));
}

#[test]
fn test_numeric_values_tolerate_whitespace() {
    let config = TokenizerConfig::from_parameters(&params(&[(PARAM_MAX_LENGTH, " 32 ")])).unwrap();
    assert_eq!(config.max_length(), 32);
}

#[test]
fn test_stop_words_case_insensitive() {
    let config = TokenizerConfig::builder()
        .stop_words(["The", "AND"])
        .build()
        .unwrap();

    assert!(config.is_stop_word(b"the"));
    assert!(config.is_stop_word(b"THE"));
    assert!(config.is_stop_word(b"And"));
    assert!(!config.is_stop_word(b"then"));
    assert!(!config.is_stop_word(b""));
}

#[test]
fn test_separator_set_dedups() {
    let set = SeparatorSet::new("a,a,");
    assert_eq!(set.as_bytes(), b"a,");
    assert!(set.contains(b','));
    assert!(!set.contains(b'b'));
}

#[test]
fn test_canonical_name() {
    assert_eq!(canonical_name("MinLength").unwrap(), PARAM_MIN_LENGTH);
    assert_eq!(
        canonical_name("STOPWORDSCASEINSENSITIVE").unwrap(),
        PARAM_STOP_WORDS
    );

    let err = canonical_name("separator").unwrap_err();
    assert!(err.to_string().contains("Invalid parameter 'separator'"));
}

#[test]
fn test_validate_value() {
    assert!(validate_value(PARAM_MIN_LENGTH, "0").is_ok());
    assert!(validate_value(PARAM_MIN_LENGTH, "x").is_err());
    assert!(validate_value(PARAM_MAX_LENGTH, "0").is_err());
    assert!(validate_value(PARAM_MAX_LENGTH, "1").is_ok());
    // separators and stop words accept any literal text
    assert!(validate_value(PARAM_MAJOR_SEPARATORS, "").is_ok());
    assert!(validate_value(PARAM_STOP_WORDS, ",,,").is_ok());
}
