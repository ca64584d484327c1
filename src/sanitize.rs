//! User text to payload conversion.
//!
//! Code 39 has no lowercase symbols and reserves `*` for the start/stop
//! character, so arbitrary text is upper-cased and filtered down to the 43
//! payload symbols before it is encoded.

use crate::tables::{self, SENTINEL};

/// Returns true if `c` can appear in a payload: it has a pattern in the
/// symbol table and is not the start/stop character.
#[inline]
pub fn is_payload(c: char) -> bool {
    c != SENTINEL && tables::pattern(c).is_some()
}

/// Upper-cases `text` and keeps only the payload symbols, in their original
/// order. Never fails; the result may be empty.
pub fn sanitize(text: &str) -> String {
    payload_chars(text).collect()
}

/// Number of payload symbols `text` sanitizes to, without allocating.
pub fn payload_len(text: &str) -> usize {
    payload_chars(text).count()
}

fn payload_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(|&c| is_payload(c))
}
