use std::fs;

use log::debug;
use serde_json::Value;

use errors::{ConvertError, ConvertResult};

pub mod errors;

/// Reads a keypair file holding a JSON array of bytes, e.g. the id.json
/// written by solana-keygen, and returns the raw bytes.
///
/// The array length is not validated, any sequence of 0-255 integers goes.
pub fn read_keypair_bytes(path: &str) -> ConvertResult<Vec<u8>> {
    let contents = fs::read_to_string(path)
        .map_err(|err| ConvertError::FileNotFound(path.to_string(), err))?;

    // Malformed JSON and well-formed JSON of the wrong shape are distinct
    // failure classes, so parse into a value before coercing to bytes
    let value: Value = serde_json::from_str(&contents)
        .map_err(|err| ConvertError::InvalidJson(path.to_string(), err))?;
    let keypair: Vec<u8> =
        serde_json::from_value(value).map_err(ConvertError::InvalidKeypair)?;

    debug!("read {} keypair bytes from '{}'", keypair.len(), path);
    Ok(keypair)
}

/// Standard base58 (Bitcoin alphabet), no checksum. Leading zero bytes
/// encode as leading '1' characters.
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

pub fn convert(path: &str) -> ConvertResult<String> {
    let keypair = read_keypair_bytes(path)?;
    Ok(encode_base58(&keypair))
}
