//! Converts a single 64-bit word to and from a fixed-width group of ten
//! base 93 digits.
//!
//! The digit alphabet is the printable ASCII range `'!'` (code 33) through
//! `'}'` (code 125), with digit value `code - 33`. `'~'` is the one
//! printable character past the end of the alphabet; it is never produced
//! and decoding rejects it. Ten digits suffice for any word since
//! `93^10 > 2^64`.
//!
//! Groups are written most significant digit first and left-padded with the
//! zero digit `'!'` to the full width.

use std::fmt;

use super::Error;

/// Amount of digits in an encoded group.
pub const WIDTH: usize = 10;

/// Amount of distinct digit values.
const BASE: u64 = 93;

/// Char code of the zero digit, `'!'`.
const DIGIT_ZERO: u8 = b'!';

/// Char code of the highest digit, `'}'`, value 92.
const DIGIT_MAX: u8 = DIGIT_ZERO + 92;

/// Encodes a word as one group of ten digits, returning it as a [`String`].
///
/// This is equivalent to using [`encode`] with a [`String`].
///
/// Use [`from_str`] to reverse the operation.
#[must_use]
pub fn to_string(word: u64) -> String {
    let mut result = String::with_capacity(WIDTH);

    encode(&mut result, word).expect("write to String cannot fail");

    result
}

/// Encodes a word as one group of ten digits, writing them to a buffer.
///
/// Use [`from_str`] to reverse the operation.
///
/// # Errors
///
/// Returns [`Err`] if and only if `writer` returns [`Err`].
pub fn encode<W: fmt::Write>(mut writer: W, word: u64) -> fmt::Result {
    let mut group = [DIGIT_ZERO; WIDTH];

    let mut n = word;
    for code in group.iter_mut().rev() {
        *code = DIGIT_ZERO + low_digit(n);
        n /= BASE;
    }

    for code in group {
        writer.write_char(char::from(code))?;
    }

    Ok(())
}

/// Decodes a group of up to ten digits back into a word.
///
/// Input shorter than the full width is treated as if it were left-padded
/// with the zero digit, so the empty string decodes to `0`.
///
/// # Errors
///
/// Returns [`Err`] if the input is longer than [`WIDTH`] bytes, contains a
/// character outside the digit alphabet, or encodes a value that does not
/// fit a [`u64`].
pub fn from_str(input: &str) -> Result<u64, Error> {
    from_bytes(input.as_bytes())
}

/// Decodes a group like [`from_str`], but maps every malformed input to the
/// zero word instead of failing.
///
/// This reproduces the zero-fallback of older base93 implementations:
/// empty input, input longer than ten bytes, and input containing a
/// character outside the digit alphabet all yield `0`, and over-wide group
/// values wrap. Use [`from_str`] unless byte-for-byte compatibility with
/// that behavior is required.
#[must_use]
pub fn from_str_lossy(input: &str) -> u64 {
    from_bytes_lossy(input.as_bytes())
}

pub(crate) fn from_bytes(input: &[u8]) -> Result<u64, Error> {
    if input.len() > WIDTH {
        return Err(Error::LenMismatch);
    }

    let mut value: u64 = 0;
    for &code in input {
        let digit = digit_value(code)?;
        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(Error::WordRange)?;
    }

    Ok(value)
}

pub(crate) fn from_bytes_lossy(input: &[u8]) -> u64 {
    if input.is_empty() || input.len() > WIDTH {
        return 0;
    }

    let mut value: u64 = 0;
    for &code in input {
        let Ok(digit) = digit_value(code) else {
            return 0;
        };
        value = value.wrapping_mul(BASE).wrapping_add(u64::from(digit));
    }

    value
}

/// Lowest base 93 digit of a word.
#[expect(clippy::cast_possible_truncation)]
fn low_digit(n: u64) -> u8 {
    (n % BASE) as u8
}

/// Value of a single digit char code.
fn digit_value(code: u8) -> Result<u8, Error> {
    match code {
        DIGIT_ZERO..=DIGIT_MAX => Ok(code - DIGIT_ZERO),
        _ => Err(Error::ContentFormat),
    }
}
