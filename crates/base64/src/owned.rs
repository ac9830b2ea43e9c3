//! Helpers that allocate their own output.

use crate::{calculate_encoded_length, encode, try_decode, Alphabet, Base64Error};

/// Encodes a byte slice to a padded base64 string.
///
/// # Example
///
/// ```
/// use base64_codec::{encode_to_string, Alphabet};
///
/// assert_eq!(encode_to_string(b"hello world", Alphabet::Standard), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode_to_string(input: &[u8], alphabet: Alphabet) -> String {
    let mut buf = vec![0u8; calculate_encoded_length(input.len())];
    let capacity = buf.len();
    let len = encode(input, input.len(), &mut buf, capacity, alphabet);
    buf[..len].iter().map(|&b| b as char).collect()
}

/// Decodes base64 text in either alphabet.
///
/// # Example
///
/// ```
/// use base64_codec::decode_to_vec;
///
/// assert_eq!(decode_to_vec(b"aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn decode_to_vec(input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    // Upper bound for any input, including a trailing partial group.
    let mut buf = vec![0u8; input.len().div_ceil(4) * 3];
    let capacity = buf.len();
    let len = try_decode(input, input.len(), &mut buf, capacity)?;
    buf.truncate(len);
    Ok(buf)
}
