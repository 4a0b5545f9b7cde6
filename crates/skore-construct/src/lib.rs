//! Sulakore construct library entry.
//!
//! This crate holds the packet builder behind a list-view style packet
//! constructor: the value log and its cached packet, display rows, and the
//! YAML packet scripts the `skore-construct` binary renders. It is intended
//! to be consumed by UI front ends, the binary (`main.rs`), and integration
//! tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod builder;
pub mod config;
pub mod rows;
pub mod script;

pub use builder::ConstructBuilder;
pub use rows::{DisplayRow, WriteBatch};
