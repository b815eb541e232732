use super::*;
use crate::config::{PARAM_MAJOR_SEPARATORS, PARAM_MAX_LENGTH, PARAM_MIN_LENGTH, PARAM_STOP_WORDS};
use tempfile::TempDir;

// ========================================================================
// ParameterStore
// ========================================================================

#[test]
fn test_new_store_has_defaults() {
    let store = ParameterStore::new_in_memory().unwrap();
    let parameters = store.parameters().unwrap();

    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "majorseparators",
            "maxlength",
            "minlength",
            "minorseparators",
            "stopwordscaseinsensitive",
        ]
    );
    assert_eq!(
        store.get_parameter(PARAM_MAX_LENGTH).unwrap().as_deref(),
        Some("128")
    );
    assert!(parameters.iter().all(|p| !p.updated_at.is_empty()));
}

#[test]
fn test_set_parameter_is_case_insensitive() {
    let store = ParameterStore::new_in_memory().unwrap();
    store.set_parameter("MinLength", "4").unwrap();

    assert_eq!(
        store.get_parameter(PARAM_MIN_LENGTH).unwrap().as_deref(),
        Some("4")
    );
}

#[test]
fn test_set_unknown_parameter_fails() {
    let store = ParameterStore::new_in_memory().unwrap();
    let err = store.set_parameter("delimiter", ",").unwrap_err();
    assert!(err.to_string().contains("Invalid parameter 'delimiter'"));
}

#[test]
fn test_set_invalid_number_fails() {
    let store = ParameterStore::new_in_memory().unwrap();
    assert!(store.set_parameter(PARAM_MAX_LENGTH, "0").is_err());
    assert!(store.set_parameter(PARAM_MIN_LENGTH, "abc").is_err());

    // the stored value is untouched
    assert_eq!(
        store.get_parameter(PARAM_MAX_LENGTH).unwrap().as_deref(),
        Some("128")
    );
}

#[test]
fn test_load_config_uses_stored_values() {
    let store = ParameterStore::new_in_memory().unwrap();
    store.set_parameter(PARAM_MAJOR_SEPARATORS, " ").unwrap();
    store.set_parameter(PARAM_STOP_WORDS, "a,the").unwrap();
    store.set_parameter(PARAM_MIN_LENGTH, "1").unwrap();

    let config = store.load_config().unwrap();
    assert_eq!(config.major_separators().as_bytes(), b" ");
    assert_eq!(config.min_length(), 1);
    assert_eq!(config.max_length(), 128);
    assert!(config.is_stop_word(b"The"));
}

#[test]
fn test_open_creates_and_reopens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("params.sqlite");

    {
        let store = ParameterStore::open(&path).unwrap();
        store.set_parameter(PARAM_MIN_LENGTH, "3").unwrap();
    }

    let store = ParameterStore::open_existing(&path).unwrap();
    assert_eq!(
        store.get_parameter(PARAM_MIN_LENGTH).unwrap().as_deref(),
        Some("3")
    );
    assert_eq!(store.parameters().unwrap().len(), 5);
}

#[test]
fn test_open_existing_missing_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.sqlite");

    let err = ParameterStore::open_existing(&path).err().unwrap();
    assert!(err.to_string().contains("does not exist"));
    assert!(!path.exists());
}

#[test]
fn test_delete_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("params.sqlite");

    drop(ParameterStore::open(&path).unwrap());
    assert!(path.exists());

    ParameterStore::delete(&path).unwrap();
    assert!(!path.exists());

    let err = ParameterStore::delete(&path).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_replace_all() {
    let mut store = ParameterStore::new_in_memory().unwrap();
    let mut parameters = BTreeMap::new();
    parameters.insert("MAXLENGTH".to_string(), "10".to_string());
    parameters.insert(PARAM_MAJOR_SEPARATORS.to_string(), ";".to_string());

    store.replace_all(&parameters).unwrap();

    let map = store.parameter_map().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(PARAM_MAX_LENGTH).map(String::as_str), Some("10"));
}

#[test]
fn test_replace_all_rejects_bad_input_atomically() {
    let mut store = ParameterStore::new_in_memory().unwrap();
    let mut parameters = BTreeMap::new();
    parameters.insert(PARAM_MIN_LENGTH.to_string(), "1".to_string());
    parameters.insert("bogus".to_string(), "x".to_string());

    assert!(store.replace_all(&parameters).is_err());
    assert_eq!(store.parameters().unwrap().len(), 5);
}

#[test]
fn test_reopen_does_not_reseed_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("params.sqlite");

    {
        let mut store = ParameterStore::open(&path).unwrap();
        let mut parameters = BTreeMap::new();
        parameters.insert(PARAM_MIN_LENGTH.to_string(), "1".to_string());
        store.replace_all(&parameters).unwrap();
    }

    let store = ParameterStore::open(&path).unwrap();
    store.set_parameter(PARAM_MAX_LENGTH, "50").unwrap();

    let map = store.parameter_map().unwrap();
    assert_eq!(map.len(), 2);
    assert!(!map.contains_key(PARAM_MAJOR_SEPARATORS));

    let config = store.load_config().unwrap();
    assert!(config.major_separators().is_empty());
    assert_eq!(config.min_length(), 1);
    assert_eq!(config.max_length(), 50);
}

#[test]
fn test_fingerprint_tracks_content() {
    let a = ParameterStore::new_in_memory().unwrap();
    let b = ParameterStore::new_in_memory().unwrap();

    let fp = a.fingerprint().unwrap();
    assert_eq!(fp.len(), 64);
    assert_eq!(fp, b.fingerprint().unwrap());

    b.set_parameter(PARAM_MIN_LENGTH, "9").unwrap();
    assert_ne!(fp, b.fingerprint().unwrap());
}

// ========================================================================
// Snapshot records
// ========================================================================

#[test]
fn test_encode_records_layout() {
    let mut parameters = BTreeMap::new();
    parameters.insert("minlength".to_string(), "2".to_string());
    parameters.insert("maxlength".to_string(), "128".to_string());

    let bytes = encode_records(&parameters).unwrap();
    assert_eq!(bytes, b"000dmaxlength=128000bminlength=2".to_vec());
}

#[test]
fn test_records_survive_export_and_import() {
    let source = ParameterStore::new_in_memory().unwrap();
    source.set_parameter(PARAM_STOP_WORDS, "a=b,c").unwrap();
    let bytes = source.export_records().unwrap();

    let decoded = decode_records(&bytes).unwrap();
    assert_eq!(decoded.get(PARAM_STOP_WORDS).map(String::as_str), Some("a=b,c"));
    assert_eq!(
        decoded.get(PARAM_MAJOR_SEPARATORS).map(String::as_str),
        Some(" []<>(){}|!;,'\"*&?+\r\n\t")
    );

    let mut target = ParameterStore::new_in_memory().unwrap();
    target.set_parameter(PARAM_MIN_LENGTH, "7").unwrap();
    target.replace_all(&decoded).unwrap();
    assert_eq!(target.fingerprint().unwrap(), source.fingerprint().unwrap());
}

#[test]
fn test_decode_empty_snapshot() {
    assert!(decode_records(b"").unwrap().is_empty());
}

#[test]
fn test_decode_keeps_first_of_repeated_names() {
    let parameters = decode_records(b"000bminlength=1000bminlength=5").unwrap();
    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters.get(PARAM_MIN_LENGTH).map(String::as_str), Some("1"));
}

#[test]
fn test_decode_rejects_corruption() {
    let cases: [&[u8]; 4] = [
        b"00",                 // truncated prefix
        b"zzzzminlength=1",    // prefix not hex
        b"0010minlength=1",    // record runs past the end
        b"0009minlength",      // no separator
    ];

    for case in cases {
        let err = decode_records(case).unwrap_err();
        assert!(
            matches!(err, ConfigError::CorruptSnapshot { .. }),
            "expected corruption error for {:?}",
            case
        );
    }
}

#[test]
fn test_decode_reports_offset() {
    let err = decode_records(b"0003a=1zz").unwrap_err();
    match err {
        ConfigError::CorruptSnapshot { offset, .. } => assert_eq!(offset, 7),
        other => panic!("unexpected error: {other}"),
    }
}
