//! Reversible binary-to-text encoding over 93 printable ASCII symbols.
//!
//! Bytes are packed into 64-bit big-endian words (see [`pack`]), and each
//! word is rendered as a fixed group of ten base 93 digits (see [`word`])
//! drawn from the ASCII range `'!'` through `'}'`. The encoded text contains
//! no whitespace, control characters or multi-byte characters, and its
//! length is always a multiple of ten.
//!
//! Encoding always succeeds. Decoding comes in two flavors:
//!
//! - the strict functions ([`from_str`], [`decode`], [`word::from_str`])
//!   reject malformed input with an [`Error`];
//! - the `_lossy` functions reproduce the zero-fallback behavior of older
//!   base93 implementations, silently mapping malformed groups to zero
//!   words.
//!
//! Byte buffers whose length is not a multiple of eight are zero-padded
//! before packing and the padding survives a round trip; see the [`pack`]
//! module docs.
//!
//! The [`Encoded`] type wraps a canonical encoded string and provides the
//! conversion surface between text, bytes, and words.

use std::{fmt, io};

// for benchmarks
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use smallvec as _;

pub mod pack;
pub mod word;

mod encoded;
#[cfg(test)]
mod tests;

pub use encoded::Encoded;

/// Error decoding base93 data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The written buffer returned an error.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input length does not fit the fixed group width.
    #[error("input length invalid for the group width")]
    LenMismatch,
    /// A character is not a base 93 digit.
    #[error("char code out of range for a base 93 digit")]
    ContentFormat,
    /// A ten-digit group encodes a value above [`u64::MAX`].
    #[error("group value out of range for a 64-bit word")]
    WordRange,
}

/// The exact char length that a byte count encodes to.
///
/// This can be used to reserve space in a buffer.
pub const fn encoded_len(byte_count: usize) -> usize {
    byte_count.div_ceil(pack::WORD_BYTES) * word::WIDTH
}

/// The exact byte length that a valid encoded char count decodes to.
///
/// This can be used to reserve space in a buffer.
pub const fn max_byte_len(char_count: usize) -> usize {
    char_count / word::WIDTH * pack::WORD_BYTES
}

/// Encodes bytes as base93 text, returning a [`String`] with the result.
///
/// This is equivalent to using [`encode`] with a [`String`].
///
/// Use [`from_str`] to reverse the operation.
#[must_use]
pub fn to_string(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(encoded_len(bytes.len()));

    encode(&mut result, bytes).expect("write to String cannot fail");

    result
}

/// Encodes bytes as base93 text, writing it to a buffer.
///
/// Every packed word becomes one ten-char group; groups are written in word
/// order. Use [`decode`] to reverse the operation.
///
/// # Errors
///
/// Returns [`Err`] if and only if `writer` returns [`Err`].
pub fn encode<W: fmt::Write>(mut writer: W, bytes: &[u8]) -> fmt::Result {
    for packed in pack::pack(bytes) {
        word::encode(&mut writer, packed)?;
    }

    Ok(())
}

/// Equivalent to [`decode`] with a [`Vec<u8>`] as the buffer.
///
/// # Errors
///
/// Returns [`Err`] if the data is invalid.
pub fn from_str(input: &str) -> Result<Vec<u8>, Error> {
    let mut result = Vec::with_capacity(max_byte_len(input.len()));

    decode(&mut result, input)?;
    Ok(result)
}

/// Decodes a string holding base93 text, writing the bytes to a buffer.
///
/// The output is 8 bytes per ten-char group; zero bytes appended by the
/// encoder to pad the final word are not stripped.
///
/// # Errors
///
/// Returns [`Err`] if the input length is not a multiple of the group width,
/// a group is not valid base93, or `writer` returns [`Err`].
pub fn decode<W: io::Write>(mut writer: W, input: &str) -> Result<(), Error> {
    let (groups, remainder) = input.as_bytes().as_chunks::<{ word::WIDTH }>();
    if !remainder.is_empty() {
        return Err(Error::LenMismatch);
    }

    for group in groups {
        let value = word::from_bytes(group)?;
        writer.write_all(&value.to_be_bytes())?;
    }

    Ok(())
}

/// Decodes like [`from_str`], but maps malformed input to zero words instead
/// of failing.
///
/// The input is treated as if left-padded with the zero digit `'!'` to a
/// multiple of the group width, so a short leading group decodes by value.
/// Groups containing characters outside the digit alphabet become the zero
/// word, and over-wide group values wrap.
///
/// This reproduces the whole-string padding of older base93 implementations.
/// It only behaves usefully when the input is a concatenation of complete
/// groups: externally truncated text decodes to garbage, not to a prefix of
/// the original bytes.
#[must_use]
pub fn from_str_lossy(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let lead = bytes.len() % word::WIDTH;

    let word_count = bytes.len().div_ceil(word::WIDTH);
    let mut result = Vec::with_capacity(word_count * pack::WORD_BYTES);

    if lead != 0 {
        let value = word::from_bytes_lossy(&bytes[..lead]);
        result.extend_from_slice(&value.to_be_bytes());
    }

    let (groups, _) = bytes[lead..].as_chunks::<{ word::WIDTH }>();
    for group in groups {
        let value = word::from_bytes_lossy(group);
        result.extend_from_slice(&value.to_be_bytes());
    }

    result
}
