//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::MAX_ATOM_LEN;

#[inline]
pub fn assert_atom_fits(atom: &str) {
    assert!(
        atom.len() <= MAX_ATOM_LEN,
        "atom_table: atom of {} bytes does not fit the 1-byte length prefix \
         (callers must keep atoms within {MAX_ATOM_LEN} bytes or use try_put)",
        atom.len()
    );
}

/// Count after appending one record to a table holding `len` records.
#[inline]
pub fn ensure_next_count(len: usize, table: &str) -> u32 {
    len.checked_add(1)
        .and_then(|count| u32::try_from(count).ok())
        .unwrap_or_else(|| panic!("{table}: record count overflows the u32 header"))
}

#[inline]
pub fn ensure_offset_fits(len: usize) -> u32 {
    u32::try_from(len)
        .unwrap_or_else(|_| panic!("atom_table: byte offset {len} does not fit in u32"))
}

#[inline]
pub fn ensure_atom_utf8(raw: &[u8]) -> &str {
    std::str::from_utf8(raw)
        .expect("atom_table: stored atom is not UTF-8 (records are only built from &str)")
}
