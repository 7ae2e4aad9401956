#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Atom and export tables for BEAM bytecode modules.
//!
//! Both tables are append-only and deduplicating, and keep their serialized
//! form up to date on every insertion:
//! - [`AtomTable`]: interns identifier strings into dense `u32` indices
//! - [`ExportTable`]: records `(name atom, arity) -> label` for exported functions
//!
//! Serialized layouts (all integers big-endian):
//!
//! ```text
//! atoms:   u32 count | count × (u8 len, len bytes)
//! exports: u32 count | count × (u32 name, u32 arity, u32 label)
//! ```

pub mod atom_table;
pub mod dump;
pub mod error;
pub mod export_table;

mod invariants;

#[cfg(test)]
mod dump_tests;

pub use atom_table::{AtomTable, MAX_ATOM_LEN};
pub use dump::{Config, dump, dump_atoms, dump_exports};
pub use error::{Section, TableError};
pub use export_table::{Export, ExportTable, RECORD_SIZE};

/// Size of the `u32` count header that starts every table.
pub const HEADER_SIZE: usize = beam_core::U32_SIZE;
