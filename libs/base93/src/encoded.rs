//! An owned, canonical base93 value.

use std::str::FromStr;
use std::{fmt, io};

use super::Error;

/// An immutable base93 string with conversions from and to its decoded
/// forms.
///
/// The value holds only the encoded text; decoded views are derived on
/// demand, so there is no stale cached state to keep in sync. Construct it
/// from decoded data with [`from_bytes`], [`from_text`] or [`from_words`],
/// or parse already-encoded text with [`str::parse`].
///
/// [`from_bytes`]: Self::from_bytes
/// [`from_text`]: Self::from_text
/// [`from_words`]: Self::from_words
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Encoded(String);

impl Encoded {
    /// Encodes a byte buffer.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(crate::to_string(bytes))
    }

    /// Encodes the UTF-8 bytes of a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Encodes a word sequence directly, one group per word.
    #[must_use]
    pub fn from_words(words: &[u64]) -> Self {
        let mut result = String::with_capacity(words.len() * crate::word::WIDTH);

        for &word in words {
            crate::word::encode(&mut result, word).expect("write to String cannot fail");
        }

        Self(result)
    }

    /// The encoded text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the encoded text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Decodes back into bytes.
    ///
    /// Buffers whose length was not a multiple of eight come back with
    /// trailing zero padding; see the [`pack`](crate::pack) module docs.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        crate::from_str(&self.0).expect("held text is always canonical")
    }

    /// Decodes back into text.
    ///
    /// Trailing zero bytes are stripped before conversion, since the packing
    /// padding is indistinguishable from content; text that genuinely ends
    /// in NUL characters therefore does not round-trip. Invalid UTF-8
    /// sequences are replaced with [`char::REPLACEMENT_CHARACTER`].
    #[must_use]
    pub fn to_text(&self) -> String {
        let bytes = self.to_bytes();
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);

        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }
}

impl FromStr for Encoded {
    type Err = Error;

    /// Parses already-encoded text, validating it without re-encoding.
    fn from_str(s: &str) -> Result<Self, Error> {
        crate::decode(io::sink(), s)?;
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Encoded {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Encoded> for String {
    fn from(value: Encoded) -> Self {
        value.0
    }
}
