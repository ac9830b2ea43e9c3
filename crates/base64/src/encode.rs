//! Buffer encoder.

use crate::constants::PAD;
use crate::length::checked_encoded_length;
use crate::{Alphabet, Base64Error};

/// Encodes the first `input_length` bytes of `input` into `output`.
///
/// At most `output_length` bytes of `output` are used. Returns the number of characters
/// written, or `0` (with nothing written) if the output is too small.
///
/// # Example
///
/// ```
/// use base64_codec::{encode, Alphabet};
///
/// let mut out = [0u8; 4];
/// let len = encode(b"Ma", 2, &mut out, 4, Alphabet::Standard);
/// assert_eq!(&out[..len], b"TWE=");
/// ```
pub fn encode(
    input: &[u8],
    input_length: usize,
    output: &mut [u8],
    output_length: usize,
    alphabet: Alphabet,
) -> usize {
    try_encode(input, input_length, output, output_length, alphabet).unwrap_or(0)
}

/// Like [`encode`], but reports a short output buffer as [`Base64Error::BufferTooSmall`].
pub fn try_encode(
    input: &[u8],
    input_length: usize,
    output: &mut [u8],
    output_length: usize,
    alphabet: Alphabet,
) -> Result<usize, Base64Error> {
    let input = &input[..input_length.min(input.len())];
    let capacity = output_length.min(output.len());
    let required = checked_encoded_length(input.len()).ok_or(Base64Error::LengthOverflow {
        length: input.len(),
    })?;
    if capacity < required {
        tracing::debug!(required, capacity, "base64 encode: output buffer too small");
        return Err(Base64Error::BufferTooSmall { required, capacity });
    }

    let chars = alphabet.chars();
    let mut j = 0;

    let mut chunks = input.chunks_exact(3);
    for chunk in &mut chunks {
        let v = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        output[j] = chars[(v >> 18) as usize];
        output[j + 1] = chars[((v >> 12) & 0x3f) as usize];
        output[j + 2] = chars[((v >> 6) & 0x3f) as usize];
        output[j + 3] = chars[(v & 0x3f) as usize];
        j += 4;
    }

    match *chunks.remainder() {
        [o1] => {
            let v = u32::from(o1);
            output[j] = chars[(v >> 2) as usize];
            output[j + 1] = chars[((v << 4) & 0x3f) as usize];
            output[j + 2] = PAD;
            output[j + 3] = PAD;
            j += 4;
        }
        [o1, o2] => {
            let v = (u32::from(o1) << 8) | u32::from(o2);
            output[j] = chars[(v >> 10) as usize];
            output[j + 1] = chars[((v >> 4) & 0x3f) as usize];
            output[j + 2] = chars[((v << 2) & 0x3f) as usize];
            output[j + 3] = PAD;
            j += 4;
        }
        _ => {}
    }

    tracing::trace!(input = input.len(), written = j, ?alphabet, "base64 encode");
    Ok(j)
}
