//! Top-level facade crate for Sulakore packet construction.
//!
//! Re-exports the core protocol types and the construct builder so users can
//! depend on a single crate.

pub mod core {
    pub use skore_core::*;
}

pub mod construct {
    pub use skore_construct::*;
}

pub use skore_construct::ConstructBuilder;
pub use skore_core::{Charset, Packet, SkoreError, TypedValue, ValueKind};
