//! Protocol modules (values, encoder, packet framing, structure descriptor).
//!
//! - `value`: the typed field model (`TypedValue` with an explicit `ValueKind`).
//! - `encode`: big-endian field encoding plus display renderings.
//! - `packet`: `length + header + body` framing and typed body reads.
//! - `structure`: the `{l}{u:H}{t:v}...` descriptor grammar.
//!
//! All parsers are panic-free: malformed input is reported as `SkoreError`
//! instead of panicking or indexing raw buffers.

pub mod encode;
pub mod packet;
pub mod structure;
pub mod value;
