use std::fmt;

use super::*;

#[test]
fn round_trip_aligned() {
    let data: Vec<u8> = (0..=u8::MAX).collect();

    round_trip_core(&data, to_string, from_str);
}

#[test]
fn round_trip_aligned_lossy() {
    let data: Vec<u8> = (0..=u8::MAX).collect();

    round_trip_core(&data, to_string, |s| Ok::<_, Error>(from_str_lossy(s)));
}

#[test]
fn round_trip_unaligned_keeps_zero_tail() {
    let data: Vec<u8> = (1..=21).collect();

    let back = from_str(&to_string(&data)).expect("decoding failed");

    let mut padded = data;
    padded.resize(24, 0);
    assert_eq!(back, padded);
}

#[test]
fn pack_pads_final_word() {
    assert!(pack::pack(&[]).is_empty());
    assert_eq!(pack::pack(&[1]), [0x0100_0000_0000_0000]);
    assert_eq!(
        pack::pack(&[1, 2, 3, 4, 5, 6, 7, 8, 9]),
        [0x0102_0304_0506_0708, 0x0900_0000_0000_0000]
    );
}

#[test]
fn unpack_is_big_endian() {
    let bytes = pack::unpack_to_vec(&[0x0102_0304_0506_0708]);

    assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn word_fixed_width_and_alphabet() {
    for n in [0, 1, 92, 93, 12345, 1 << 32, u64::MAX] {
        let group = word::to_string(n);

        assert_eq!(group.len(), word::WIDTH);
        assert!(group.bytes().all(|b| (b'!'..=b'}').contains(&b)));
        assert_eq!(word::from_str(&group).expect("group is valid"), n);
    }
}

#[test]
fn word_round_trip_sweep() {
    let mut n: u64 = 0;
    loop {
        assert_eq!(word::from_str(&word::to_string(n)).expect("group is valid"), n);

        let Some(next) = n.checked_mul(3).and_then(|v| v.checked_add(41)) else {
            break;
        };
        n = next;
    }
}

#[test]
fn word_vectors() {
    assert_eq!(word::to_string(0), "!!!!!!!!!!");
    assert_eq!(word::to_string(92), "!!!!!!!!!}");
    assert_eq!(word::to_string(93), "!!!!!!!!\"!");
    assert_eq!(word::from_str("!!!!!!!!\"!").expect("group is valid"), 93);
}

#[test]
fn word_short_input_is_left_padded() {
    assert_eq!(word::from_str("\"!").expect("group is valid"), 93);
    assert_eq!(word::from_str("").expect("empty is the zero word"), 0);
}

#[test]
fn word_strict_rejects_malformed() {
    word::from_str("!!!!!!!!!!!").expect_err("eleven digits");
    word::from_str("!!!!!!!!!~").expect_err("'~' is not a digit");
    word::from_str("!!!!!!!!! ").expect_err("' ' is not a digit");
    word::from_str("}}}}}}}}}}").expect_err("value above u64::MAX");
}

#[test]
fn word_lossy_zero_fallback() {
    assert_eq!(word::from_str_lossy(""), 0);
    assert_eq!(word::from_str_lossy("!!!!!!!!!!!"), 0);
    assert_eq!(word::from_str_lossy("!!!!!!!!!~"), 0);
    assert_eq!(word::from_str_lossy("!!!!!!!!! "), 0);
    assert_eq!(word::from_str_lossy(&word::to_string(12345)), 12345);
}

#[test]
fn stream_empty() {
    assert_eq!(to_string(&[]), "");
    assert!(from_str("").expect("empty is valid").is_empty());
    assert!(from_str_lossy("").is_empty());
}

#[test]
fn stream_strict_rejects_partial_group() {
    from_str("!!!!!").expect_err("length not a multiple of the group width");
}

#[test]
fn stream_strict_rejects_bad_digit() {
    let mut text = to_string(b"12345678");
    text.replace_range(0..1, "~");

    from_str(&text).expect_err("'~' is not a digit");
}

#[test]
fn stream_lossy_left_pad_equivalence() {
    let text = to_string(&[0, 0, 0, 0, 0, 0, 0, 1, 9]);

    // the first group encodes a small word, so it starts with zero digits
    let stripped = text.trim_start_matches('!');
    assert!(stripped.len() < text.len());

    assert_eq!(from_str_lossy(stripped), from_str_lossy(&text));
}

#[test]
fn stream_lossy_zero_fallback_group() {
    // a group with a bad digit becomes the zero word, not an error
    let mut text = to_string(b"12345678");
    text.replace_range(0..1, "~");

    assert_eq!(from_str_lossy(&text), [0; 8]);
}

#[test]
fn encoded_text_round_trip() {
    assert_eq!(Encoded::from_text("hello").to_text(), "hello");
    assert_eq!(
        Encoded::from_text("ten chars per word, eight bytes each").to_text(),
        "ten chars per word, eight bytes each"
    );
}

#[test]
fn encoded_parse_round_trip() {
    let encoded = Encoded::from_bytes(&[1, 2, 3]);
    let parsed: Encoded = encoded.as_str().parse().expect("canonical text parses");

    assert_eq!(parsed, encoded);
    assert_eq!(parsed.to_bytes(), [1, 2, 3, 0, 0, 0, 0, 0]);
}

#[test]
fn encoded_parse_rejects_malformed() {
    "~!!!!!!!!!".parse::<Encoded>().expect_err("'~' is not a digit");
    "!!!!!".parse::<Encoded>().expect_err("partial group");
}

#[test]
fn encoded_from_words() {
    let encoded = Encoded::from_words(&[0, 93]);

    assert_eq!(encoded.as_str(), "!!!!!!!!!!!!!!!!!!\"!");

    let mut expected = vec![0u8; 15];
    expected.push(93);
    assert_eq!(encoded.to_bytes(), expected);
}

#[test]
fn sizing_helpers() {
    assert_eq!(encoded_len(0), 0);
    assert_eq!(encoded_len(1), 10);
    assert_eq!(encoded_len(8), 10);
    assert_eq!(encoded_len(9), 20);
    assert_eq!(max_byte_len(20), 16);
}

fn round_trip_core<E: fmt::Debug>(
    bytes: &[u8],
    encode: impl FnOnce(&[u8]) -> String,
    decode: impl FnOnce(&str) -> Result<Vec<u8>, E>,
) {
    let encoded = encode(bytes);
    assert_eq!(encoded.len() % word::WIDTH, 0);

    let back = decode(&encoded).expect("decoding failed");

    assert_eq!(back.as_slice(), bytes);
}
