//! Parsing of base-2 integer literals and their hexadecimal rendering.

use crate::error::ConvertError;
use std::fmt;
use std::str::FromStr;

/// Text returned by [`convert_or_sentinel`] when the input is not a valid
/// binary literal.
pub const INVALID_BINARY_NUMBER: &str = "Invalid binary number";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which integer parsers commonly strip as well.
fn is_literal_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// A parsed base-2 integer of arbitrary length.
///
/// Accepted syntax: surrounding whitespace, an optional `+`/`-` sign, an
/// optional `0b`/`0B` prefix, then the digits `0` and `1`. A single
/// underscore may separate two digits or directly follow the prefix.
///
/// Formatting with `{:x}` yields lowercase hex digits, `{:#x}` adds the `0x`
/// prefix. Negative zero is normalised to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryLiteral {
    negative: bool,
    /// Most significant first, leading zeros removed. Empty for zero.
    bits: Vec<bool>,
}

impl BinaryLiteral {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of significant bits in the magnitude.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Renders the value as `0x`-prefixed lowercase hex, with a leading `-`
    /// for negative values.
    pub fn to_hex(&self) -> String {
        format!("{self:#x}")
    }

    fn hex_digits(&self) -> String {
        if self.bits.is_empty() {
            return "0".to_string();
        }

        let padding = (4 - self.bits.len() % 4) % 4;
        let padded: Vec<bool> = std::iter::repeat(false)
            .take(padding)
            .chain(self.bits.iter().copied())
            .collect();

        padded
            .chunks(4)
            .map(|nibble| {
                let value = nibble
                    .iter()
                    .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
                char::from(HEX_DIGITS[value])
            })
            .collect()
    }
}

impl FromStr for BinaryLiteral {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_matches(is_literal_whitespace);
        if trimmed.is_empty() {
            return Err(ConvertError::Empty);
        }

        let chars: Vec<char> = trimmed.chars().collect();
        let mut start = 0;

        let negative = match chars.first() {
            Some('-') => {
                start += 1;
                true
            }
            Some('+') => {
                start += 1;
                false
            }
            _ => false,
        };

        let prefixed =
            chars.get(start) == Some(&'0') && matches!(chars.get(start + 1), Some('b' | 'B'));
        if prefixed {
            start += 2;
        }

        let mut bits = Vec::with_capacity(chars.len() - start);
        // An underscore is allowed right after the prefix or after a digit.
        let mut underscore_allowed = prefixed;
        let mut pending_underscore = None;

        for (position, &ch) in chars.iter().enumerate().skip(start) {
            match ch {
                '0' | '1' => {
                    bits.push(ch == '1');
                    underscore_allowed = true;
                    pending_underscore = None;
                }
                '_' if underscore_allowed => {
                    underscore_allowed = false;
                    pending_underscore = Some(position);
                }
                '_' => return Err(ConvertError::MisplacedUnderscore { position }),
                _ => return Err(ConvertError::InvalidDigit { ch, position }),
            }
        }

        if let Some(position) = pending_underscore {
            return Err(ConvertError::MisplacedUnderscore { position });
        }
        if bits.is_empty() {
            return Err(ConvertError::MissingDigits);
        }

        let first_set = bits.iter().position(|&bit| bit).unwrap_or(bits.len());
        bits.drain(..first_set);

        Ok(BinaryLiteral {
            negative: negative && !bits.is_empty(),
            bits,
        })
    }
}

impl fmt::LowerHex for BinaryLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.hex_digits())
    }
}

/// Converts a binary literal to its `0x`-prefixed hexadecimal form.
pub fn convert(input: &str) -> Result<String, ConvertError> {
    let literal: BinaryLiteral = input.parse()?;
    Ok(literal.to_hex())
}

/// Like [`convert`], but reports failure as [`INVALID_BINARY_NUMBER`] in
/// place of the hex string.
pub fn convert_or_sentinel(input: &str) -> String {
    convert(input).unwrap_or_else(|_| INVALID_BINARY_NUMBER.to_string())
}
