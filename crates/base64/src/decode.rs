//! Buffer decoder.
//!
//! Input is consumed in groups of four characters. A group ends early at the first pad
//! character or at the end of input, and decoding stops after such a short group: anything
//! following padding in the middle of the input is ignored.

use crate::constants::{sextet, PAD};
use crate::length::calculate_decoded_length;
use crate::Base64Error;

/// Decodes the first `input_length` characters of `input` into `output`.
///
/// At most `output_length` bytes of `output` are used. Returns the number of bytes written,
/// or `0` (with nothing written) if the output is too small or a consumed character is not
/// base64.
///
/// # Example
///
/// ```
/// use base64_codec::decode;
///
/// let mut out = [0u8; 3];
/// let len = decode(b"TWFu", 4, &mut out, 3);
/// assert_eq!(&out[..len], b"Man");
/// ```
pub fn decode(input: &[u8], input_length: usize, output: &mut [u8], output_length: usize) -> usize {
    try_decode(input, input_length, output, output_length).unwrap_or(0)
}

/// Like [`decode`], but reports why decoding failed.
///
/// Input whose length is not a multiple of four is accepted: the trailing partial group is
/// decoded as if padded.
pub fn try_decode(
    input: &[u8],
    input_length: usize,
    output: &mut [u8],
    output_length: usize,
) -> Result<usize, Base64Error> {
    let input = &input[..input_length.min(input.len())];
    let capacity = output_length.min(output.len());

    let required = calculate_decoded_length(input, input.len());
    if capacity < required {
        tracing::debug!(required, capacity, "base64 decode: output buffer too small");
        return Err(Base64Error::BufferTooSmall { required, capacity });
    }

    // Validate everything and size the output before the first write.
    let mut produced = 0;
    for group in Groups::new(input) {
        produced += group?.len();
    }
    if capacity < produced {
        tracing::debug!(produced, capacity, "base64 decode: output buffer too small");
        return Err(Base64Error::BufferTooSmall {
            required: produced,
            capacity,
        });
    }

    let mut j = 0;
    for group in Groups::new(input).flatten() {
        let len = group.len();
        output[j..j + len].copy_from_slice(&group.bytes()[..len]);
        j += len;
    }

    tracing::trace!(input = input.len(), written = j, "base64 decode");
    Ok(j)
}

/// Up to four sextets packed into the high bits of a 24-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Group {
    value: u32,
    count: usize,
}

impl Group {
    /// Number of bytes this group decodes to.
    fn len(&self) -> usize {
        self.count.saturating_sub(1)
    }

    fn bytes(&self) -> [u8; 3] {
        [
            (self.value >> 16) as u8,
            (self.value >> 8) as u8,
            self.value as u8,
        ]
    }
}

struct Groups<'a> {
    input: &'a [u8],
    position: usize,
    done: bool,
}

impl<'a> Groups<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            done: false,
        }
    }
}

impl Iterator for Groups<'_> {
    type Item = Result<Group, Base64Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.position >= self.input.len() {
            return None;
        }

        let start = self.position;
        let mut group = Group { value: 0, count: 0 };
        for (k, &byte) in self.input[start..].iter().take(4).enumerate() {
            if byte == PAD {
                break;
            }
            let Some(value) = sextet(byte) else {
                self.done = true;
                let position = start + k;
                tracing::debug!(byte, position, "base64 decode: invalid character");
                return Some(Err(Base64Error::InvalidCharacter { byte, position }));
            };
            group.value |= u32::from(value) << ((3 - k) * 6);
            group.count += 1;
        }

        self.position += 4;
        if group.count < 4 {
            self.done = true;
        }
        Some(Ok(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(input: &[u8]) -> Vec<Group> {
        Groups::new(input).collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn test_groups_stop_at_short_group() {
        let all = groups(b"TWFuTQ==TWFu");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].count, 4);
        assert_eq!(all[1].count, 2);
    }

    #[test]
    fn test_group_lengths() {
        assert_eq!(groups(b"TWFu")[0].len(), 3);
        assert_eq!(groups(b"TWE=")[0].len(), 2);
        assert_eq!(groups(b"TQ==")[0].len(), 1);
        assert_eq!(groups(b"T===")[0].len(), 0);
        assert_eq!(groups(b"====")[0].len(), 0);
    }

    #[test]
    fn test_group_bytes() {
        assert_eq!(&groups(b"TWFu")[0].bytes(), b"Man");
    }

    #[test]
    fn test_invalid_character_position() {
        let mut out = [0u8; 6];
        assert_eq!(
            try_decode(b"TWFuT@==", 8, &mut out, 6),
            Err(Base64Error::InvalidCharacter {
                byte: b'@',
                position: 5
            })
        );
        assert_eq!(out, [0u8; 6]);
    }

    #[test]
    fn test_characters_after_pad_are_not_consumed() {
        let mut out = [0u8; 3];
        assert_eq!(try_decode(b"TQ=!", 4, &mut out, 3), Ok(1));
        assert_eq!(out[0], b'M');
    }
}
