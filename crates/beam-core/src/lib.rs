#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared building blocks for BEAM module tables.
//!
//! - Big-endian `u32` encoding on growable byte buffers
//! - Erlang bit-string rendering (`<<0,0,0,1>>`) for golden fixtures
//! - Terminal color palette and index-width helpers for debug dumps

pub mod bytes;
pub mod colors;
pub mod format;


pub use bytes::{U32_SIZE, bit_string, patch_u32_be, push_u32_be, read_u32_be};
pub use colors::Colors;
pub use format::width_for_count;
