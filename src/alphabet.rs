//! Symbol <-> value lookup for the base58 alphabet.
//! Both directions are `const` tables; the inverse covers all 256 byte values.

use crate::ALPHABET;

/// Marker for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

/// The symbol for value zero; leading zero bytes encode as runs of it.
pub(crate) const ZERO_SYMBOL: u8 = ALPHABET[0];

#[allow(clippy::cast_possible_truncation)]
const SYMBOL_TO_VAL: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Value `0..58` of `symbol`, or `None` if it is not in the alphabet.
#[inline]
#[must_use]
pub fn value_of(symbol: u8) -> Option<u8> {
    match SYMBOL_TO_VAL[usize::from(symbol)] {
        INVALID => None,
        val => Some(val),
    }
}

/// Symbol for `value`. Callers guarantee `value < 58`.
#[inline]
#[must_use]
pub fn symbol_of(value: u8) -> u8 {
    ALPHABET[usize::from(value)]
}
