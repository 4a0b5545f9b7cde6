//! Packet framing and typed body reads (panic-free).
//!
//! Frame layout:
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0x00    4B    length (u32 BE, counts header + body, not itself)
//! 0x04    2B    header (u16 BE)
//! 0x06    ..    body (concatenated field encodings)
//! ```
//!
//! Parsing rules:
//! - Never index (`buf[0]`) — always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use std::sync::Arc;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Result, SkoreError};
use crate::protocol::encode::{self, Charset};
use crate::protocol::structure;
use crate::protocol::value::{TypedValue, ValueKind};

/// Size of the length prefix.
pub const FRAME_LENGTH_SIZE: usize = 4;
/// Size of the header field.
pub const FRAME_HEADER_SIZE: usize = 2;

/// A built packet: header plus the encoded fields it carries.
///
/// `body` is the encoding of `fields` in order. The header is not part of
/// `body`, so re-addressing a packet never re-encodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Message id, usually picked at send time.
    pub header: u16,
    /// Field values in wire order.
    pub fields: Arc<[TypedValue]>,
    /// Encoded fields (zero-copy shared between clones).
    pub body: Bytes,
}

impl Packet {
    /// Encode `fields` into a fresh packet.
    pub fn build(header: u16, fields: &[TypedValue], charset: Charset) -> Result<Self> {
        let cap = fields.iter().map(|v| encode::encoded_len(v, charset)).sum();
        let mut body = BytesMut::with_capacity(cap);
        for v in fields {
            encode::put_value(&mut body, v, charset)?;
        }
        frame_length(body.len())?;
        Ok(Self {
            header,
            fields: fields.into(),
            body: body.freeze(),
        })
    }

    /// Same fields and body under a different header.
    pub fn with_header(&self, header: u16) -> Self {
        Self {
            header,
            fields: Arc::clone(&self.fields),
            body: self.body.clone(),
        }
    }

    /// Framed size in bytes.
    pub fn frame_len(&self) -> usize {
        FRAME_LENGTH_SIZE + FRAME_HEADER_SIZE + self.body.len()
    }

    /// Framed wire bytes.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let len = frame_length(self.body.len())?;
        let mut out = BytesMut::with_capacity(self.frame_len());
        out.put_u32(len);
        out.put_u16(self.header);
        out.put_slice(&self.body);
        Ok(out.freeze())
    }

    /// Structure descriptor for this packet.
    pub fn structure(&self) -> String {
        structure::format_structure(self.header, &self.fields)
    }
}

/// Length prefix for a body of `body_len` bytes; must fit the `u32` field.
fn frame_length(body_len: usize) -> Result<u32> {
    body_len
        .checked_add(FRAME_HEADER_SIZE)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            SkoreError::InvalidArgument(format!("body of {body_len} bytes does not fit a frame"))
        })
}

/// A frame split into header and body, fields not yet interpreted.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub header: u16,
    pub body: Bytes,
}

impl RawFrame {
    /// Reader over the body.
    pub fn reader(&self, charset: Charset) -> PacketReader {
        PacketReader::new(self.body.clone(), charset)
    }

    /// Read fields of the given kinds; the body must be consumed exactly.
    pub fn decode_fields(&self, kinds: &[ValueKind], charset: Charset) -> Result<Vec<TypedValue>> {
        let mut r = self.reader(charset);
        let values = kinds
            .iter()
            .map(|&k| r.read_kind(k))
            .collect::<Result<Vec<_>>>()?;
        if r.remaining() != 0 {
            return Err(SkoreError::Malformed(format!(
                "{} trailing bytes after {} fields",
                r.remaining(),
                kinds.len()
            )));
        }
        Ok(values)
    }
}

/// Decode one framed packet from bytes.
pub fn decode_frame(mut buf: Bytes) -> Result<RawFrame> {
    if buf.remaining() < FRAME_LENGTH_SIZE + FRAME_HEADER_SIZE {
        return Err(SkoreError::Malformed("frame too short".into()));
    }

    let declared = buf.get_u32() as usize;
    if declared < FRAME_HEADER_SIZE {
        return Err(SkoreError::Malformed(format!(
            "declared length {declared} smaller than header"
        )));
    }
    if declared != buf.remaining() {
        return Err(SkoreError::Malformed(format!(
            "declared length {declared} but {} bytes follow",
            buf.remaining()
        )));
    }

    let header = buf.get_u16();
    let body = buf.copy_to_bytes(buf.remaining());
    Ok(RawFrame { header, body })
}

/// Sequential typed reads over a packet body.
#[derive(Debug, Clone)]
pub struct PacketReader {
    buf: Bytes,
    charset: Charset,
}

impl PacketReader {
    pub fn new(buf: Bytes, charset: Charset) -> Self {
        Self { buf, charset }
    }

    /// Unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn need(&self, n: usize, what: &str) -> Result<()> {
        if self.buf.remaining() < n {
            return Err(SkoreError::Malformed(format!(
                "{what} needs {n} bytes, {} remaining",
                self.buf.remaining()
            )));
        }
        Ok(())
    }

    pub fn read_integer(&mut self) -> Result<i32> {
        self.need(4, "integer")?;
        Ok(self.buf.get_i32())
    }

    pub fn read_boolean(&mut self) -> Result<bool> {
        self.need(1, "boolean")?;
        match self.buf.get_u8() {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(SkoreError::Malformed(format!("boolean byte {other:#04x}"))),
        }
    }

    pub fn read_string(&mut self) -> Result<String> {
        self.need(2, "string length")?;
        let len = self.buf.get_u16() as usize;
        self.need(len, "string data")?;
        let raw = self.buf.copy_to_bytes(len);
        self.charset.decode(&raw)
    }

    /// Read one value of `kind`.
    pub fn read_kind(&mut self, kind: ValueKind) -> Result<TypedValue> {
        match kind {
            ValueKind::Integer => self.read_integer().map(TypedValue::Integer),
            ValueKind::Boolean => self.read_boolean().map(TypedValue::Boolean),
            ValueKind::String => self.read_string().map(TypedValue::String),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn frame_length_counts_header() {
        assert_eq!(frame_length(0).unwrap(), 2);
        assert_eq!(frame_length(9).unwrap(), 11);
        assert_eq!(frame_length(u32::MAX as usize - 2).unwrap(), u32::MAX);
    }

    #[test]
    fn frame_length_rejects_overflow() {
        for n in [u32::MAX as usize - 1, usize::MAX] {
            let err = frame_length(n).unwrap_err();
            assert_eq!(err.code().as_str(), "INVALID_ARGUMENT", "body_len={n}");
        }
    }
}
