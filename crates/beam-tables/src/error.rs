//! Error types for table insertion and decoding.

use std::fmt;

/// Which table a decode error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Atoms,
    Exports,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atoms => f.write_str("atom table"),
            Self::Exports => f.write_str("export table"),
        }
    }
}

/// Table insertion or decode error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("atom too long: {len} bytes (max 255)")]
    AtomTooLong { len: usize },
    #[error("{section} truncated: need {needed} bytes, got {available}")]
    Truncated {
        section: Section,
        needed: usize,
        available: usize,
    },
    #[error("{section} has {extra} trailing bytes")]
    TrailingBytes { section: Section, extra: usize },
    #[error("atom {index} is not valid UTF-8")]
    InvalidUtf8 { index: u32 },
    #[error("atom {index} duplicates {atom:?}")]
    DuplicateAtom { index: u32, atom: String },
    #[error("duplicate export {name}/{arity}")]
    DuplicateExport { name: u32, arity: u32 },
}
