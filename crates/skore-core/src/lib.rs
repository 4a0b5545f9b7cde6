//! Sulakore core: typed packet values, the big-endian value encoder, packet
//! framing, and the structure descriptor grammar.
//!
//! This crate defines the wire-level contracts and error surface shared by the
//! construct builder and any tooling that reads or replays packets. It carries
//! no UI or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SkoreError`/`Result` so a bad edit or a
//! malformed capture never takes the host process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorCode, Result, SkoreError};
pub use protocol::encode::Charset;
pub use protocol::packet::Packet;
pub use protocol::value::{TypedValue, ValueKind};
