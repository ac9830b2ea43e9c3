//! Alphabet selection.

use crate::constants::{ALPHABET, ALPHABET_URL};

/// The character set used when encoding.
///
/// Decoding does not need to know the alphabet: both share one reverse table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /`
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`
    UrlSafe,
}

impl Alphabet {
    /// Maps a `url_safe` flag to an alphabet.
    pub const fn from_url_safe(url_safe: bool) -> Self {
        if url_safe {
            Self::UrlSafe
        } else {
            Self::Standard
        }
    }

    /// The 64 characters of this alphabet, indexed by 6-bit value.
    pub const fn chars(self) -> &'static [u8; 64] {
        match self {
            Self::Standard => ALPHABET,
            Self::UrlSafe => ALPHABET_URL,
        }
    }
}
