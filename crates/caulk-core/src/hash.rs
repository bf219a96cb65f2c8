use xxhash_rust::xxh64::xxh64;

use crate::model::Location;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    if value == 0 {
        return "0".repeat(11);
    }
    let mut result = Vec::with_capacity(11);
    while value > 0 {
        let idx = (value % 62) as usize;
        result.push(BASE62_CHARS[idx]);
        value /= 62;
    }
    // Pad to 11 chars
    while result.len() < 11 {
        result.push(b'0');
    }
    result.reverse();
    String::from_utf8(result).expect("base62 chars are valid UTF-8")
}

/// Compute the stable symbol hash for a declaration or member.
///
/// hash = base62(xxhash64(qualified_name + file + span))
///
/// Identity follows the model invariant: qualified name plus source
/// location. Hosts use it to re-locate a symbol after unrelated edits.
pub fn symbol_hash(qualified_name: &str, location: &Location) -> String {
    let mut input = String::with_capacity(qualified_name.len() + location.file.len() + 24);
    input.push_str(qualified_name);
    input.push('\0'); // separator
    input.push_str(&location.file);
    input.push('\0'); // separator
    input.push_str(&location.span.start.to_string());
    input.push(':');
    input.push_str(&location.span.end.to_string());

    let hash_value = xxh64(input.as_bytes(), 0);
    base62_encode(hash_value)
}
