//! Packs byte buffers into big-endian 64-bit words and back.
//!
//! [`pack`] right-pads its input with zero bytes to a multiple of eight, so
//! [`unpack`] inverts it exactly only for inputs whose length already was a
//! multiple of eight. For everything else the trailing zero padding remains
//! in the unpacked output; it is never stripped, since the word stream does
//! not record the original length.

use std::io;

/// Amount of bytes packed into one word.
pub const WORD_BYTES: usize = 8;

/// Packs bytes into big-endian words, zero-padding the final group.
///
/// The empty slice packs to an empty vec. Never fails.
#[must_use]
pub fn pack(bytes: &[u8]) -> Vec<u64> {
    let (chunks, remainder) = bytes.as_chunks::<WORD_BYTES>();
    let mut words = Vec::with_capacity(chunks.len() + usize::from(!remainder.is_empty()));

    for &chunk in chunks {
        words.push(u64::from_be_bytes(chunk));
    }

    if !remainder.is_empty() {
        let mut last = [0u8; WORD_BYTES];
        last[..remainder.len()].copy_from_slice(remainder);
        words.push(u64::from_be_bytes(last));
    }

    words
}

/// Unpacks words back into bytes, writing them to a buffer.
///
/// Each word is written as its 8-byte big-endian representation, so the
/// output length is always `8 * words.len()`.
///
/// # Errors
///
/// Returns [`Err`] if and only if `writer` returns [`Err`].
pub fn unpack<W: io::Write>(mut writer: W, words: &[u64]) -> io::Result<()> {
    for &word in words {
        writer.write_all(&word.to_be_bytes())?;
    }

    Ok(())
}

/// Equivalent to [`unpack`] with a [`Vec<u8>`] as the buffer.
#[must_use]
pub fn unpack_to_vec(words: &[u64]) -> Vec<u8> {
    let mut result = Vec::with_capacity(words.len() * WORD_BYTES);

    unpack(&mut result, words).expect("write to Vec cannot fail");

    result
}
