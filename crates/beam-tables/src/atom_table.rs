//! Atom table: interned identifier strings.
//!
//! Serialized form is maintained incrementally, so [`AtomTable::as_bytes`]
//! is always the final section content:
//!
//! ```text
//! empty table:  <<0,0,0,0>>
//! put("atom"):  <<0,0,0,1,4,97,116,111,109>>
//! ```

use std::collections::HashMap;
use std::fmt;

use beam_core::{bit_string, patch_u32_be, read_u32_be};
use tracing::{debug, trace};

use crate::error::{Section, TableError};
use crate::{HEADER_SIZE, invariants};

/// Longest atom the 1-byte length prefix can describe.
pub const MAX_ATOM_LEN: usize = u8::MAX as usize;

/// Append-only atom table with dense 0-based indices.
///
/// Three views of the same data are kept in lockstep by [`put`](Self::put):
/// - `bytes`: the serialized table (count header + length-prefixed records)
/// - `offsets`: byte offset of each record's length prefix, by index
/// - `index`: atom text to its index
///
/// Index 0 is a real atom, not a "missing" marker. Use [`has`](Self::has)
/// or [`get`](Self::get) when absence matters.
#[derive(Clone, Debug)]
pub struct AtomTable {
    bytes: Vec<u8>,
    offsets: Vec<u32>,
    index: HashMap<String, u32>,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-size for `atoms` entries totalling roughly `bytes` of atom text.
    pub fn with_capacity(atoms: usize, bytes: usize) -> Self {
        let mut buf = Vec::with_capacity(HEADER_SIZE + atoms + bytes);
        buf.extend_from_slice(&[0; HEADER_SIZE]);
        Self {
            bytes: buf,
            offsets: Vec::with_capacity(atoms),
            index: HashMap::with_capacity(atoms),
        }
    }

    /// Intern an atom, returning its index.
    ///
    /// Putting an atom that is already present returns the original index
    /// and leaves the table untouched.
    ///
    /// # Panics
    /// Panics if `atom` is longer than [`MAX_ATOM_LEN`] bytes. The length
    /// prefix is a single byte, so callers must keep atoms within it; use
    /// [`try_put`](Self::try_put) for input that is not known to fit.
    pub fn put(&mut self, atom: &str) -> u32 {
        if let Some(&index) = self.index.get(atom) {
            trace!(atom, index, "atom already interned");
            return index;
        }
        invariants::assert_atom_fits(atom);
        self.append(atom)
    }

    /// Like [`put`](Self::put), but rejects oversized atoms instead of panicking.
    ///
    /// On error the table is unchanged.
    pub fn try_put(&mut self, atom: &str) -> Result<u32, TableError> {
        if let Some(&index) = self.index.get(atom) {
            return Ok(index);
        }
        if atom.len() > MAX_ATOM_LEN {
            return Err(TableError::AtomTooLong { len: atom.len() });
        }
        Ok(self.append(atom))
    }

    fn append(&mut self, atom: &str) -> u32 {
        let count = invariants::ensure_next_count(self.offsets.len(), "atom_table");
        let offset = invariants::ensure_offset_fits(self.bytes.len());
        let index = count - 1;

        self.bytes.push(atom.len() as u8);
        self.bytes.extend_from_slice(atom.as_bytes());
        patch_u32_be(&mut self.bytes, 0, count);
        self.offsets.push(offset);
        self.index.insert(atom.to_owned(), index);

        trace!(atom, index, offset, "interned atom");
        index
    }

    /// Whether the atom has been interned.
    #[inline]
    pub fn has(&self, atom: &str) -> bool {
        self.index.contains_key(atom)
    }

    /// Index of the atom, or `None` if it was never interned.
    #[inline]
    pub fn get(&self, atom: &str) -> Option<u32> {
        self.index.get(atom).copied()
    }

    /// Index of the atom.
    ///
    /// Returns 0 when the atom is absent, which is indistinguishable from
    /// the first atom. Check [`has`](Self::has) first if that matters.
    #[inline]
    pub fn index_of(&self, atom: &str) -> u32 {
        self.get(atom).unwrap_or(0)
    }

    /// Atom at the given index, or `""` when `index >= size()`.
    pub fn at(&self, index: u32) -> &str {
        let Some(&offset) = self.offsets.get(index as usize) else {
            return "";
        };
        let start = offset as usize + 1;
        let len = self.bytes[offset as usize] as usize;
        invariants::ensure_atom_utf8(&self.bytes[start..start + len])
    }

    /// Atom at a signed position; negative positions count from the end.
    ///
    /// `nth(-1)` is the most recently interned atom. Returns `""` when the
    /// position falls outside the table either way.
    pub fn nth(&self, n: i64) -> &str {
        let size = i64::from(self.size());
        let pos = if n < 0 { size + n } else { n };
        match u32::try_from(pos) {
            Ok(index) => self.at(index),
            Err(_) => "",
        }
    }

    /// Byte offset of the atom's record (its length prefix) in the
    /// serialized table. The first atom sits right after the header.
    pub fn offset_of(&self, atom: &str) -> Option<u32> {
        self.get(atom).map(|index| self.offsets[index as usize])
    }

    /// Number of interned atoms. Always equal to the serialized count header.
    #[inline]
    pub fn size(&self) -> u32 {
        self.offsets.len() as u32
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Atoms with their indices, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        (0..self.size()).map(move |index| (index, self.at(index)))
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
    /// The input must be exactly one table: no missing or trailing bytes,
    /// every atom valid UTF-8 and distinct.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TableError> {
        let truncated = |needed: usize| TableError::Truncated {
            section: Section::Atoms,
            needed,
            available: bytes.len(),
        };

        let count = read_u32_be(bytes, 0).ok_or_else(|| truncated(HEADER_SIZE))?;
        // Every record takes at least its length byte.
        let hint = (count as usize).min(bytes.len() - HEADER_SIZE);
        let mut table = Self::with_capacity(hint, bytes.len() - HEADER_SIZE - hint);

        let mut pos = HEADER_SIZE;
        for index in 0..count {
            let len = *bytes.get(pos).ok_or_else(|| truncated(pos + 1))? as usize;
            let start = pos + 1;
            let end = start + len;
            let raw = bytes.get(start..end).ok_or_else(|| truncated(end))?;
            let atom = std::str::from_utf8(raw).map_err(|_| TableError::InvalidUtf8 { index })?;
            if table.has(atom) {
                return Err(TableError::DuplicateAtom {
                    index,
                    atom: atom.to_owned(),
                });
            }
            table.append(atom);
            pos = end;
        }

        if pos != bytes.len() {
            return Err(TableError::TrailingBytes {
                section: Section::Atoms,
                extra: bytes.len() - pos,
            });
        }

        debug!(count, len = bytes.len(), "decoded atom table");
        Ok(table)
    }
}

impl Default for AtomTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the serialized table as an Erlang bit string.
impl fmt::Display for AtomTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bit_string(&self.bytes))
    }
}
