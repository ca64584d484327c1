//! Code 39 symbol table.

use crate::generators::bitfield::Bitfield;

/// Number of elements (bars and spaces) in one symbol.
pub const PATTERN_LEN: u8 = 12;
/// Start/stop character. Never part of a payload.
pub const SENTINEL: char = '*';

/// Every symbol of the table, in Code 39 value order: digits, letters,
/// `- . space $ / + %` and finally the start/stop character.
pub const SYMBOLS: [(char, u16); 44] = [
    ('0', 0b101001101101),
    ('1', 0b110100101011),
    ('2', 0b101100101011),
    ('3', 0b110110010101),
    ('4', 0b101001101011),
    ('5', 0b110100110101),
    ('6', 0b101100110101),
    ('7', 0b101001011011),
    ('8', 0b110100101101),
    ('9', 0b101100101101),
    ('A', 0b110101001011),
    ('B', 0b101101001011),
    ('C', 0b110110100101),
    ('D', 0b101011001011),
    ('E', 0b110101100101),
    ('F', 0b101101100101),
    ('G', 0b101010011011),
    ('H', 0b110101001101),
    ('I', 0b101101001101),
    ('J', 0b101011001101),
    ('K', 0b110101010011),
    ('L', 0b101101010011),
    ('M', 0b110110101001),
    ('N', 0b101011010011),
    ('O', 0b110101101001),
    ('P', 0b101101101001),
    ('Q', 0b101010110011),
    ('R', 0b110101011001),
    ('S', 0b101101011001),
    ('T', 0b101011011001),
    ('U', 0b110010101011),
    ('V', 0b100110101011),
    ('W', 0b110011010101),
    ('X', 0b100101101011),
    ('Y', 0b110010110101),
    ('Z', 0b100110110101),
    ('-', 0b100101011011),
    ('.', 0b110010101101),
    (' ', 0b100110101101),
    ('$', 0b100100100101),
    ('/', 0b100100101001),
    ('+', 0b100101001001),
    ('%', 0b101001001001),
    ('*', 0b100101101101),
];

/// Start/stop pattern.
pub const SENTINEL_PAT: Bitfield = Bitfield::new(SYMBOLS[43].1 as u32, PATTERN_LEN);

/// Position of `c` in [SYMBOLS].
const fn index(c: char) -> Option<usize> {
    let i = match c {
        '0'..='9' => c as usize - '0' as usize,
        'A'..='Z' => c as usize - 'A' as usize + 10,
        '-' => 36,
        '.' => 37,
        ' ' => 38,
        '$' => 39,
        '/' => 40,
        '+' => 41,
        '%' => 42,
        '*' => 43,
        _ => return None,
    };
    Some(i)
}

/// Looks up the bar/space pattern of `c`. Lowercase letters and every
/// character outside the table yield `None`.
pub const fn pattern(c: char) -> Option<Bitfield> {
    match index(c) {
        Some(i) => Some(Bitfield::new(SYMBOLS[i].1 as u32, PATTERN_LEN)),
        None => None,
    }
}
