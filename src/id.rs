//! Identifier and hash helpers
//!
//! Short unique identifiers for requests, collections, and tabs, plus a
//! deterministic string hash usable as a cache key for editor contents.

use rand::Rng;

/// Alphabet for generated identifiers: digits and letters only, never
/// `-` or `_`.
const ID_ALPHABET: &[u8] = b"useandom26T198340PX75pxJACKVERYMINDBUSHWOLFGQZbfghjklqvwyzrict";

/// Length of every generated identifier.
pub const ID_LENGTH: usize = 21;

/// Generates a 21-character identifier from the fixed 62-symbol alphabet.
///
/// Uses the thread-local cryptographically seeded generator. Uniqueness
/// is probabilistic only; there is no registry of issued identifiers.
pub fn uuid() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Deterministic 32-bit polynomial rolling hash, rendered in base-36.
///
/// Hashes the string's UTF-16 code units with `hash * 31 + unit`,
/// wrapping at 32 bits, then formats the unsigned value. Not suitable
/// for anything security sensitive.
pub fn simple_hash(input: &str) -> String {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    to_base36(hash as u32)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = String::new();
    while value > 0 {
        out.insert(0, DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out
}
