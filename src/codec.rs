//! JSON encoding and decoding of the wire payloads
//!
//! Thin layer over `serde_json` that turns its errors into
//! [`WxJsonError::Encoding`] or [`WxJsonError::Decoding`] depending on the
//! direction, so callers can tell a bad request from a server fault.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{Result, WxJsonError};

/// Encode a value as compact JSON bytes
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| WxJsonError::encoding(e.to_string()))
}

/// Encode a value as indented JSON, for dumping payloads to the log
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| WxJsonError::encoding(e.to_string()))
}

/// Decode JSON bytes into a value.
///
/// The text is parsed into a [`Value`] first, so a key repeated within one
/// object keeps its last value instead of failing the whole payload.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| WxJsonError::decoding(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| WxJsonError::decoding(e.to_string()))
}
