//! `bin2hex` converts base-2 integer literals into their hexadecimal
//! representation.
//!
//! The library parses binary literals of any length and renders them as
//! `0x`-prefixed lowercase hex. The `bin2hex` executable is a thin shell
//! around [`convert_or_sentinel`].
//!
//! # Example
//!
//! ```rust
//! use bin2hex::{convert, BinaryLiteral};
//!
//! # fn demo() -> Result<(), bin2hex::error::ConvertError> {
//! assert_eq!(convert("1010")?, "0xa");
//!
//! let literal: BinaryLiteral = "-0b1111_1111".parse()?;
//! assert_eq!(format!("{literal:#x}"), "-0xff");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod converter;
pub mod error;

pub use crate::converter::{convert, convert_or_sentinel, BinaryLiteral, INVALID_BINARY_NUMBER};
