//! Export table: the exported-function surface of a module.
//!
//! ```text
//! empty table:              <<0,0,0,0>>
//! put(0x2021, 0x1, 0xc1f2): <<0,0,0,1,0,0,32,33,0,0,0,1,0,0,193,242>>
//! ```

use std::collections::HashMap;
use std::fmt;

use beam_core::{bit_string, patch_u32_be, push_u32_be, read_u32_be};
use tracing::{debug, trace};

use crate::error::{Section, TableError};
use crate::{HEADER_SIZE, invariants};

/// Size of one export record: name, arity, label.
pub const RECORD_SIZE: usize = 12;

/// One exported function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Export {
    /// Index of the function name in the atom table.
    pub name: u32,
    pub arity: u32,
    /// Entry point label in the code section.
    pub label: u32,
}

impl Export {
    pub fn new(name: u32, arity: u32, label: u32) -> Self {
        Self { name, arity, label }
    }

    pub fn from_bytes(bytes: [u8; RECORD_SIZE]) -> Self {
        Self {
            name: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            arity: u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            label: u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        }
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0..4].copy_from_slice(&self.name.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.arity.to_be_bytes());
        bytes[8..12].copy_from_slice(&self.label.to_be_bytes());
        bytes
    }
}

/// Append-only table of `(name, arity) -> label` bindings.
///
/// The first binding for a `(name, arity)` pair wins; later puts for the
/// same pair are ignored. Records are serialized in first-insertion order.
#[derive(Clone, Debug)]
pub struct ExportTable {
    bytes: Vec<u8>,
    index: HashMap<(u32, u32), u32>,
}

impl ExportTable {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(exports: usize) -> Self {
        let mut bytes = Vec::with_capacity(HEADER_SIZE + exports.saturating_mul(RECORD_SIZE));
        bytes.extend_from_slice(&[0; HEADER_SIZE]);
        Self {
            bytes,
            index: HashMap::with_capacity(exports),
        }
    }

    /// Export `name/arity` with the given entry label.
    ///
    /// No effect if `name/arity` is already exported.
    pub fn put(&mut self, name: u32, arity: u32, label: u32) {
        if let Some(&existing) = self.index.get(&(name, arity)) {
            trace!(name, arity, label, existing, "export already present");
            return;
        }
        self.append(Export::new(name, arity, label));
    }

    fn append(&mut self, export: Export) {
        let count = invariants::ensure_next_count(self.index.len(), "export_table");

        push_u32_be(&mut self.bytes, export.name);
        push_u32_be(&mut self.bytes, export.arity);
        push_u32_be(&mut self.bytes, export.label);
        patch_u32_be(&mut self.bytes, 0, count);
        self.index.insert((export.name, export.arity), export.label);

        trace!(
            name = export.name,
            arity = export.arity,
            label = export.label,
            "exported function"
        );
    }

    #[inline]
    pub fn has(&self, name: u32, arity: u32) -> bool {
        self.index.contains_key(&(name, arity))
    }

    /// Label bound to `name/arity`, or `None` if it is not exported.
    #[inline]
    pub fn get(&self, name: u32, arity: u32) -> Option<u32> {
        self.index.get(&(name, arity)).copied()
    }

    /// Label bound to `name/arity`.
    ///
    /// Returns 0 when the pair is not exported. Module code never places
    /// an entry point at label 0, so callers may treat it as "absent"; the
    /// table itself does not forbid putting label 0.
    #[inline]
    pub fn label_of(&self, name: u32, arity: u32) -> u32 {
        self.get(name, arity).unwrap_or(0)
    }

    /// Number of distinct exported `(name, arity)` pairs.
    #[inline]
    pub fn size(&self) -> u32 {
        self.index.len() as u32
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Exports in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Export> + '_ {
        self.bytes[HEADER_SIZE..]
            .chunks_exact(RECORD_SIZE)
            .map(|chunk| {
                let mut record = [0u8; RECORD_SIZE];
                record.copy_from_slice(chunk);
                Export::from_bytes(record)
            })
    }

    /// The serialized table.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Rebuild a table from its serialized form.
    ///
    /// The input must hold exactly `count` records with no duplicate
    /// `(name, arity)` pairs.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TableError> {
        let count = read_u32_be(bytes, 0).ok_or(TableError::Truncated {
            section: Section::Exports,
            needed: HEADER_SIZE,
            available: bytes.len(),
        })?;

        let needed = (count as usize)
            .checked_mul(RECORD_SIZE)
            .and_then(|n| n.checked_add(HEADER_SIZE))
            .unwrap_or(usize::MAX);
        if bytes.len() < needed {
            return Err(TableError::Truncated {
                section: Section::Exports,
                needed,
                available: bytes.len(),
            });
        }
        if bytes.len() > needed {
            return Err(TableError::TrailingBytes {
                section: Section::Exports,
                extra: bytes.len() - needed,
            });
        }

        let mut table = Self::with_capacity(count as usize);
        for chunk in bytes[HEADER_SIZE..].chunks_exact(RECORD_SIZE) {
            let mut record = [0u8; RECORD_SIZE];
            record.copy_from_slice(chunk);
            let export = Export::from_bytes(record);
            if table.has(export.name, export.arity) {
                return Err(TableError::DuplicateExport {
                    name: export.name,
                    arity: export.arity,
                });
            }
            table.append(export);
        }

        debug!(count, len = bytes.len(), "decoded export table");
        Ok(table)
    }
}

impl Default for ExportTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the serialized table as an Erlang bit string.
impl fmt::Display for ExportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bit_string(&self.bytes))
    }
}
