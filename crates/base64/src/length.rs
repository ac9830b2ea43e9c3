//! Output buffer size calculation.

use crate::constants::PAD;
use crate::Base64Error;

/// Returns the number of characters needed to encode `length` bytes, padding included.
///
/// This is `ceil(length / 3) * 4`. When that does not fit in a `usize` (only for lengths
/// beyond any real slice) it returns `usize::MAX`, which no buffer can satisfy since slices
/// never exceed `isize::MAX` bytes. Use [`checked_encoded_length`] to detect that case.
///
/// # Example
///
/// ```
/// use base64_codec::calculate_encoded_length;
///
/// assert_eq!(calculate_encoded_length(0), 0);
/// assert_eq!(calculate_encoded_length(4), 8);
/// ```
pub fn calculate_encoded_length(length: usize) -> usize {
    checked_encoded_length(length).unwrap_or(usize::MAX)
}

/// Like [`calculate_encoded_length`], but returns `None` on overflow.
pub fn checked_encoded_length(length: usize) -> Option<usize> {
    length.div_ceil(3).checked_mul(4)
}

/// Returns the number of bytes that decoding the first `length` characters of `data` produces.
///
/// Only the final 4-character group is inspected for padding. This is a size estimate for
/// buffer allocation, not a validator.
///
/// Returns `0` when `length < 4`, which callers cannot tell apart from an empty result; use
/// [`try_decoded_length`] to get an error instead.
///
/// # Example
///
/// ```
/// use base64_codec::calculate_decoded_length;
///
/// assert_eq!(calculate_decoded_length(b"TWE=", 4), 2);
/// assert_eq!(calculate_decoded_length(b"TW", 2), 0);
/// ```
pub fn calculate_decoded_length(data: &[u8], length: usize) -> usize {
    try_decoded_length(data, length).unwrap_or(0)
}

/// Like [`calculate_decoded_length`], but reports short input as
/// [`Base64Error::InvalidLength`].
pub fn try_decoded_length(data: &[u8], length: usize) -> Result<usize, Base64Error> {
    let length = length.min(data.len());
    if length < 4 {
        return Err(Base64Error::InvalidLength { length });
    }

    let max_length = (length / 4) * 3;
    if data[length - 2] == PAD {
        Ok(max_length - 2)
    } else if data[length - 1] == PAD {
        Ok(max_length - 1)
    } else {
        Ok(max_length)
    }
}
