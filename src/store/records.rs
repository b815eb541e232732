//! Flat snapshot format: each record is four lowercase hex digits holding the
//! byte length of `name=value`, followed by `name=value` itself.

use std::collections::BTreeMap;

use crate::config::ConfigError;

const LENGTH_DIGITS: usize = 4;
const MAX_RECORD_LEN: usize = 0xffff;

/// Encode parameters in name order
pub fn encode_records(parameters: &BTreeMap<String, String>) -> Result<Vec<u8>, ConfigError> {
    let mut out = Vec::new();

    for (name, value) in parameters {
        let record = format!("{}={}", name, value);
        if record.len() > MAX_RECORD_LEN {
            return Err(ConfigError::CorruptSnapshot {
                offset: out.len(),
                reason: format!(
                    "parameter '{}' is {} bytes, records hold at most {}",
                    name,
                    record.len(),
                    MAX_RECORD_LEN
                ),
            });
        }
        out.extend_from_slice(format!("{:04x}", record.len()).as_bytes());
        out.extend_from_slice(record.as_bytes());
    }

    Ok(out)
}

/// Decode a snapshot; when a name repeats, the first record wins
pub fn decode_records(bytes: &[u8]) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut parameters = BTreeMap::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let corrupt = |reason: &str| ConfigError::CorruptSnapshot {
            offset,
            reason: reason.to_string(),
        };

        let header = bytes
            .get(offset..offset + LENGTH_DIGITS)
            .ok_or_else(|| corrupt("truncated length prefix"))?;
        let header = std::str::from_utf8(header).map_err(|_| corrupt("length prefix is not hex"))?;
        let len = usize::from_str_radix(header, 16).map_err(|_| corrupt("length prefix is not hex"))?;

        let start = offset + LENGTH_DIGITS;
        let body = bytes
            .get(start..start + len)
            .ok_or_else(|| corrupt("record runs past end of snapshot"))?;
        let body = std::str::from_utf8(body).map_err(|_| corrupt("record is not valid UTF-8"))?;
        let (name, value) = body
            .split_once('=')
            .ok_or_else(|| corrupt("record has no '=' separator"))?;

        parameters
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
        offset = start + len;
    }

    Ok(parameters)
}
