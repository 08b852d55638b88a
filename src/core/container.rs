//! ISO 6346 container identifier parsing and check digit validation.
//!
//! A container number is a 4-letter prefix (3-letter owner code plus a
//! 1-letter equipment category), a 6-digit serial and an optional check
//! digit: `CSQU3054383`. Input may carry spaces, hyphens or any other
//! punctuation; everything that is not an ASCII letter or digit is dropped
//! before the split.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::letters::letter_value;

/// Characters that participate in the check digit computation.
const SIGNIFICANT_CHARS: usize = 10;

/// Parsed, validated container identifier.
///
/// Construction is all-or-nothing: once a value exists, every computation on
/// it is infallible. The identifier never mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerIdentifier {
    owner_code: String,
    category: char,
    serial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    provided_check_digit: Option<u8>,
}

impl ContainerIdentifier {
    /// Parse a raw container number in any reasonable shape.
    ///
    /// Accepts `"CSQU3054383"`, `"CSQU 305438 3"`, `"csqu-305438-3"` and the
    /// 10-character form without a check digit. Alphanumeric characters past
    /// index 10 are ignored, matching the leniency of the upstream checker;
    /// callers wanting strictness should compare against [`canonical`].
    ///
    /// [`canonical`]: ContainerIdentifier::canonical
    pub fn parse(raw: &str) -> Result<Self> {
        Self::build(raw, None)
    }

    /// Parse with an explicit equipment category, replacing the 4th parsed
    /// character. The override is case-normalized and validated like the
    /// parsed character.
    pub fn parse_with_category(raw: &str, category: &str) -> Result<Self> {
        Self::build(raw, Some(category))
    }

    fn build(raw: &str, category_override: Option<&str>) -> Result<Self> {
        let normalized = normalize(raw);

        if normalized.len() < SIGNIFICANT_CHARS {
            return Err(Error::malformed_input(raw, normalized.len()));
        }

        // normalize() only keeps ASCII, so byte indexing is char indexing
        let owner_code = &normalized[0..3];
        if !owner_code.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(Error::invalid_owner_code(owner_code));
        }

        let category = match category_override {
            Some(override_str) => parse_category(override_str)?,
            None => {
                let parsed = normalized.as_bytes()[3] as char;
                if !parsed.is_ascii_uppercase() {
                    return Err(Error::invalid_category_code(parsed.to_string()));
                }
                parsed
            }
        };

        let serial = &normalized[4..10];
        if !serial.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(Error::invalid_serial(serial));
        }

        let provided_check_digit = match normalized.as_bytes().get(10) {
            Some(byte) => {
                let ch = *byte as char;
                let digit = ch
                    .to_digit(10)
                    .ok_or_else(|| Error::invalid_check_digit(ch.to_string()))?;
                Some(digit as u8)
            }
            None => None,
        };

        Ok(Self {
            owner_code: owner_code.to_string(),
            category,
            serial: serial.to_string(),
            provided_check_digit,
        })
    }

    pub fn owner_code(&self) -> &str {
        &self.owner_code
    }

    pub fn category(&self) -> char {
        self.category
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Check digit supplied by the raw input, if it carried one.
    pub fn provided_check_digit(&self) -> Option<u8> {
        self.provided_check_digit
    }

    /// Compute the ISO 6346 check digit from owner code, category and serial.
    ///
    /// Each of the 10 significant characters contributes its value times
    /// 2^position; the sum is reduced modulo 11, and a remainder of exactly
    /// 10 maps to a check digit of 0 (the standard's rule, not an error).
    pub fn check_digit(&self) -> u8 {
        let sum: u32 = self
            .significant_chars()
            .enumerate()
            .map(|(position, ch)| char_value(ch) << position)
            .sum();

        ((sum % 11) % 10) as u8
    }

    /// Whether the provided check digit matches the computed one.
    ///
    /// False when the input carried no check digit; that is "unknown", not
    /// an error.
    pub fn is_valid(&self) -> bool {
        match self.provided_check_digit {
            Some(given) => given == self.check_digit(),
            None => false,
        }
    }

    /// Canonical 11-character form, always using the computed check digit.
    pub fn canonical(&self) -> String {
        format!(
            "{}{}{}{}",
            self.owner_code,
            self.category,
            self.serial,
            self.check_digit()
        )
    }

    /// The 10-character prefix+serial without the check digit.
    pub fn significant(&self) -> String {
        format!("{}{}{}", self.owner_code, self.category, self.serial)
    }

    fn significant_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.owner_code
            .chars()
            .chain(std::iter::once(self.category))
            .chain(self.serial.chars())
    }
}

/// Strip everything that is not an ASCII letter or digit, uppercase the rest.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

fn parse_category(override_str: &str) -> Result<char> {
    let mut chars = override_str.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(ch.to_ascii_uppercase()),
        _ => Err(Error::invalid_category_code(override_str)),
    }
}

fn char_value(ch: char) -> u32 {
    match ch.to_digit(10) {
        Some(digit) => digit,
        // construction guarantees A-Z on the letter positions
        None => letter_value(ch).unwrap_or(0),
    }
}
