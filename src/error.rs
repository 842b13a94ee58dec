//! Defines custom error types for the converter.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned when a string is not a valid base-2 integer literal.
pub enum ConvertError {
    #[error("Input is empty")]
    Empty,

    #[error("Literal has a sign or radix prefix but no binary digits")]
    MissingDigits,

    #[error("Invalid character '{ch}' at position {position}: only '0' and '1' are binary digits")]
    InvalidDigit { ch: char, position: usize },

    #[error("Misplaced underscore at position {position}: underscores may only separate digits")]
    MisplacedUnderscore { position: usize },
}
