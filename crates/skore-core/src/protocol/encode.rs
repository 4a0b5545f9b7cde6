//! Big-endian field encoder and byte renderings.
//!
//! Encoding rules:
//! - Integer: 4 bytes, two's complement, big-endian.
//! - Boolean: one byte, `0x01` / `0x00`.
//! - String: `u16` big-endian byte length, then the charset-encoded bytes.

use std::fmt::Write;

use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SkoreError};
use crate::protocol::value::TypedValue;

/// Byte written for characters Latin-1 cannot represent.
const LATIN1_REPLACEMENT: u8 = b'?';

/// Highest byte value rendered as `[n]` by [`to_escaped_text`].
const ESCAPED_CONTROL_MAX: u8 = 13;

/// String charset on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Single-byte legacy charset (ISO-8859-1).
    #[default]
    Latin1,
    Utf8,
}

impl Charset {
    /// Encode a string. Latin-1 replaces code points above `0xFF` with `?`.
    pub fn encode(self, s: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => s.as_bytes().to_vec(),
            Charset::Latin1 => {
                let mut replaced = 0usize;
                let out = s
                    .chars()
                    .map(|c| {
                        u8::try_from(u32::from(c)).unwrap_or_else(|_| {
                            replaced += 1;
                            LATIN1_REPLACEMENT
                        })
                    })
                    .collect();
                if replaced > 0 {
                    tracing::debug!(replaced, "latin-1 string had unmappable characters");
                }
                out
            }
        }
    }

    /// Decode string bytes read off the wire.
    pub fn decode(self, raw: &[u8]) -> Result<String> {
        match self {
            Charset::Utf8 => String::from_utf8(raw.to_vec())
                .map_err(|e| SkoreError::Malformed(format!("invalid utf-8 string: {e}"))),
            Charset::Latin1 => Ok(raw.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

/// Number of bytes `value` occupies on the wire.
pub fn encoded_len(value: &TypedValue, charset: Charset) -> usize {
    match value {
        TypedValue::Integer(_) => 4,
        TypedValue::Boolean(_) => 1,
        TypedValue::String(s) => {
            2 + match charset {
                Charset::Latin1 => s.chars().count(),
                Charset::Utf8 => s.len(),
            }
        }
    }
}

/// Append the encoding of `value` to `buf`.
///
/// Fails without touching `buf` if a string encodes to more than `u16::MAX` bytes.
pub fn put_value(buf: &mut BytesMut, value: &TypedValue, charset: Charset) -> Result<()> {
    match value {
        TypedValue::Integer(i) => buf.put_i32(*i),
        TypedValue::Boolean(b) => buf.put_u8(u8::from(*b)),
        TypedValue::String(s) => {
            let raw = charset.encode(s);
            let len = u16::try_from(raw.len()).map_err(|_| {
                SkoreError::InvalidArgument(format!(
                    "string encodes to {} bytes, limit is {}",
                    raw.len(),
                    u16::MAX
                ))
            })?;
            buf.put_u16(len);
            buf.put_slice(&raw);
        }
    }
    Ok(())
}

/// Encode one value into its own buffer.
pub fn encode_value(value: &TypedValue, charset: Charset) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(encoded_len(value, charset));
    put_value(&mut buf, value, charset)?;
    Ok(buf.freeze())
}

/// Space-separated uppercase hex, e.g. `00 00 00 2A`.
pub fn to_display_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (i, b) in data.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02X}");
    }
    out
}

/// Inverse of [`to_display_hex`]. Accepts either case.
pub fn from_display_hex(text: &str) -> Result<Vec<u8>> {
    let mut compact = String::with_capacity(text.len());
    for pair in text.split_whitespace() {
        if pair.len() != 2 {
            return Err(SkoreError::InvalidArgument(format!("bad hex byte {pair:?}")));
        }
        compact.push_str(pair);
    }
    hex::decode(&compact)
        .map_err(|e| SkoreError::InvalidArgument(format!("bad hex {text:?}: {e}")))
}

/// Latin-1 text render with control bytes `0..=13` shown as `[n]`.
///
/// This is the packet-log style render; it is lossy and only meant for eyes.
pub fn to_escaped_text(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    for &b in data {
        if b <= ESCAPED_CONTROL_MAX {
            let _ = write!(out, "[{b}]");
        } else {
            out.push(char::from(b));
        }
    }
    out
}
