//! Field encoder vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use skore_core::error::ErrorCode;
use skore_core::protocol::encode::{
    encode_value, encoded_len, from_display_hex, to_display_hex, to_escaped_text,
};
use skore_core::{Charset, TypedValue};

use vector_loader::{load, EncodeVector};

#[test]
fn encode_vectors() {
    let files = [
        "encode_integer.json",
        "encode_integer_negative.json",
        "encode_integer_min.json",
        "encode_boolean_true.json",
        "encode_boolean_false.json",
        "encode_string_ascii.json",
        "encode_string_empty.json",
        "encode_string_latin1.json",
        "encode_string_latin1_replacement.json",
        "encode_string_utf8.json",
    ];

    for f in files {
        let v: EncodeVector = load(f);
        let got = encode_value(&v.value, v.charset).expect("encode failed");
        assert_eq!(hex::encode(&got), v.expect_hex, "vector={}", v.description);
        assert_eq!(got.len(), encoded_len(&v.value, v.charset), "vector={}", v.description);
    }
}

#[test]
fn default_charset_is_latin1() {
    assert_eq!(Charset::default(), Charset::Latin1);
}

#[test]
fn oversized_string_is_rejected() {
    let long = TypedValue::String("x".repeat(u16::MAX as usize + 1));
    let err = encode_value(&long, Charset::Latin1).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::InvalidArgument);

    let max = TypedValue::String("x".repeat(u16::MAX as usize));
    let ok = encode_value(&max, Charset::Latin1).unwrap();
    assert_eq!(&ok[..2], &[0xFF, 0xFF]);
}

#[test]
fn encoded_len_matches_encoding_for_wide_chars() {
    let value = TypedValue::from("a\u{e9}\u{20ac}\u{1f600}");
    for charset in [Charset::Latin1, Charset::Utf8] {
        let got = encode_value(&value, charset).unwrap();
        assert_eq!(encoded_len(&value, charset), got.len(), "charset={charset:?}");
    }
    assert_eq!(encoded_len(&value, Charset::Latin1), 2 + 4);
    assert_eq!(encoded_len(&value, Charset::Utf8), 2 + 1 + 2 + 3 + 4);
}

#[test]
fn display_hex_is_reversible() {
    let raw = [0x00, 0x00, 0x00, 0x2A, 0x01, 0xFF];
    let text = to_display_hex(&raw);
    assert_eq!(text, "00 00 00 2A 01 FF");
    assert_eq!(from_display_hex(&text).unwrap(), raw);
    assert_eq!(from_display_hex("0a 0B").unwrap(), vec![0x0A, 0x0B]);
    assert_eq!(to_display_hex(&[]), "");
    assert!(from_display_hex("").unwrap().is_empty());
}

#[test]
fn display_hex_rejects_garbage() {
    for bad in ["0", "zz", "001", "0x 01", "+1", "-1", "+1 0A", "0A -1"] {
        let err = from_display_hex(bad).expect_err(bad);
        assert_eq!(err.code(), ErrorCode::InvalidArgument, "input={bad}");
    }
}

#[test]
fn escaped_text_marks_low_control_bytes() {
    assert_eq!(to_escaped_text(&[0, 2, b'h', b'i']), "[0][2]hi");
    assert_eq!(to_escaped_text(&[13, 14, 0xE9]), "[13]\u{e}é");
}
