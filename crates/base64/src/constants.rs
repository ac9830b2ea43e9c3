//! Alphabets, padding and the shared reverse lookup table.

/// Standard base64 alphabet.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: u8 = b'=';

/// Marks a byte that belongs to neither alphabet.
pub(crate) const INVALID: i8 = -1;

/// Lowest character of either alphabet (`+`); the lookup table starts here.
pub(crate) const LOOKUP_OFFSET: u8 = b'+';

const LOOKUP_LEN: usize = (b'z' - LOOKUP_OFFSET) as usize + 1;

/// Reverse lookup for both alphabets, indexed by `byte - LOOKUP_OFFSET`.
///
/// `+`/`-` and `/`/`_` sit at different positions, so one table decodes both.
static LOOKUP: [i8; LOOKUP_LEN] = {
    let mut table = [INVALID; LOOKUP_LEN];
    let mut i = 0;
    while i < 64 {
        table[(ALPHABET[i] - LOOKUP_OFFSET) as usize] = i as i8;
        table[(ALPHABET_URL[i] - LOOKUP_OFFSET) as usize] = i as i8;
        i += 1;
    }
    table
};

/// Returns the 6-bit value of an encoded character, or `None` if it is not base64.
#[inline]
pub(crate) fn sextet(byte: u8) -> Option<u8> {
    let index = byte.checked_sub(LOOKUP_OFFSET)? as usize;
    match LOOKUP.get(index) {
        Some(&value) if value != INVALID => Some(value as u8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alphabet_character_maps_back() {
        for (i, (&std, &url)) in ALPHABET.iter().zip(ALPHABET_URL.iter()).enumerate() {
            assert_eq!(sextet(std), Some(i as u8));
            assert_eq!(sextet(url), Some(i as u8));
        }
    }

    #[test]
    fn test_table_bounds() {
        assert_eq!(LOOKUP.len(), 80);
        assert_eq!(sextet(b'+'), Some(62));
        assert_eq!(sextet(b'z'), Some(51));
    }

    #[test]
    fn test_non_alphabet_bytes() {
        for byte in [b'!', b'*', b',', b'.', b'@', b'[', b'`', b'{', b'=', b' ', 0x00, 0xff] {
            assert_eq!(sextet(byte), None, "byte {byte:#04x} should be invalid");
        }
    }
}
