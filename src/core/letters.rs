//! ISO 6346 letter values.
//!
//! The standard assigns A=10 through Z=38 but never hands out a value that
//! is a multiple of 11, so 11, 22 and 33 are skipped and the sequence is
//! non-contiguous.

use crate::error::{Error, Result};

/// Numeric value of a letter for check digit computation.
///
/// Input is ASCII-uppercased before lookup; anything outside A-Z fails.
pub fn letter_value(letter: char) -> Result<u32> {
    let value = match letter.to_ascii_uppercase() {
        'A' => 10,
        'B' => 12,
        'C' => 13,
        'D' => 14,
        'E' => 15,
        'F' => 16,
        'G' => 17,
        'H' => 18,
        'I' => 19,
        'J' => 20,
        'K' => 21,
        'L' => 23,
        'M' => 24,
        'N' => 25,
        'O' => 26,
        'P' => 27,
        'Q' => 28,
        'R' => 29,
        'S' => 30,
        'T' => 31,
        'U' => 32,
        'V' => 34,
        'W' => 35,
        'X' => 36,
        'Y' => 37,
        'Z' => 38,
        other => return Err(Error::invalid_letter(other)),
    };

    Ok(value)
}
