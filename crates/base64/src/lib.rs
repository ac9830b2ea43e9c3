//! Base64 (RFC 4648) encoding and decoding over caller-allocated buffers.
//!
//! This crate provides:
//! - Length calculators for sizing output buffers
//! - Encoding with the standard (`+/`) or URL-safe (`-_`) alphabet, always padded
//! - Decoding of either alphabet through one shared lookup table
//! - Owned-buffer helpers, and with the default `cli` feature the logic behind the `b64`
//!   command-line tool
//!
//! The buffer functions report failure by returning `0` and writing nothing. Each has a
//! `try_` counterpart returning [`Base64Error`].
//!
//! # Example
//!
//! ```
//! use base64_codec::{calculate_decoded_length, calculate_encoded_length, decode, encode, Alphabet};
//!
//! let data = b"hello world";
//! let mut encoded = vec![0u8; calculate_encoded_length(data.len())];
//! let capacity = encoded.len();
//! let len = encode(data, data.len(), &mut encoded, capacity, Alphabet::Standard);
//! assert_eq!(&encoded[..len], b"aGVsbG8gd29ybGQ=");
//!
//! let mut decoded = vec![0u8; calculate_decoded_length(&encoded, len)];
//! let capacity = decoded.len();
//! let len = decode(&encoded, len, &mut decoded, capacity);
//! assert_eq!(&decoded[..len], data);
//! ```

use thiserror::Error;

mod alphabet;
#[cfg(feature = "cli")]
pub mod cli;
mod constants;
mod decode;
mod encode;
mod length;
mod owned;

pub use alphabet::Alphabet;
pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use decode::{decode, try_decode};
pub use encode::{encode, try_encode};
pub use length::{
    calculate_decoded_length, calculate_encoded_length, checked_encoded_length, try_decoded_length,
};
pub use owned::{decode_to_vec, encode_to_string};

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The output buffer cannot hold the result.
    #[error("output buffer too small: need {required} bytes, have {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
    /// Fewer than 4 characters were given to a decoded-length query.
    #[error("encoded length {length} is shorter than one 4-character group")]
    InvalidLength { length: usize },
    /// The encoded length of `length` bytes does not fit in a `usize`.
    #[error("encoded length of {length} bytes overflows usize")]
    LengthOverflow { length: usize },
    /// A consumed character belongs to neither alphabet.
    #[error("invalid base64 character {byte:#04x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },
}
