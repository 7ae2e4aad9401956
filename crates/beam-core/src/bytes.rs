//! Big-endian integer encoding and bit-string rendering.
//!
//! Every fixed-width field in the module tables is a big-endian `u32`.
//! These helpers keep the byte arithmetic in one place so the tables
//! only deal with record layout.

use std::fmt::Write as _;

/// Width of an encoded `u32` field.
pub const U32_SIZE: usize = 4;

/// Append a big-endian u32 to the buffer.
#[inline]
pub fn push_u32_be(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Overwrite the big-endian u32 at `offset` in place.
///
/// # Panics
/// Panics if fewer than four bytes are available at `offset`.
#[inline]
pub fn patch_u32_be(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + U32_SIZE].copy_from_slice(&value.to_be_bytes());
}

/// Read a big-endian u32 at `offset`, or `None` if the slice is too short.
#[inline]
pub fn read_u32_be(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(U32_SIZE)?;
    let field: [u8; U32_SIZE] = bytes.get(offset..end)?.try_into().ok()?;
    Some(u32::from_be_bytes(field))
}

/// Render bytes as an Erlang bit string: `<<b0,b1,...>>`.
///
/// Bytes are printed in decimal with no spaces. Golden fixtures depend on
/// this exact text.
pub fn bit_string(bytes: &[u8]) -> String {
    // "<<" + ">>" plus up to three digits and a comma per byte
    let mut out = String::with_capacity(4 + bytes.len() * 4);
    out.push_str("<<");
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write!(out, "{b}").expect("writing to a String cannot fail");
    }
    out.push_str(">>");
    out
}
