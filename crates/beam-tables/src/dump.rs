//! Human-readable table dumps for debugging and golden tests.
//!
//! ```text
//! [atoms]
//! A0 "fac"
//! A1 "state"
//!
//! [exports]
//! E0 = (A0, 1) -> L2  ; fac/1
//! ```

use std::fmt::Write as _;

use beam_core::{Colors, width_for_count};

use crate::{AtomTable, ExportTable};

/// Rendering options for dumps.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Color palette for output
    pub(crate) colors: Colors,
    /// Show the byte offset of each atom record
    pub(crate) offsets: bool,
    /// Print export fields in hexadecimal
    pub(crate) hex: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// Set whether to show atom record offsets.
    pub fn offsets(mut self, value: bool) -> Self {
        self.offsets = value;
        self
    }

    /// Set whether to print export fields in hexadecimal.
    pub fn hex(mut self, value: bool) -> Self {
        self.hex = value;
        self
    }
}

/// Dump both tables, atoms first, separated by a blank line.
///
/// Export names are resolved against `atoms`.
pub fn dump(atoms: &AtomTable, exports: &ExportTable, config: &Config) -> String {
    let mut out = dump_atoms(atoms, config);
    out.push('\n');
    out.push_str(&dump_exports(exports, Some(atoms), config));
    out
}

pub fn dump_atoms(atoms: &AtomTable, config: &Config) -> String {
    let c = &config.colors;
    let w = width_for_count(atoms.len());
    let mut out = String::new();

    writeln!(out, "{}[atoms]{}", c.blue, c.reset).unwrap();
    for (i, atom) in atoms.iter() {
        write!(out, "A{i:0w$} {}{atom:?}{}", c.green, c.reset).unwrap();
        if config.offsets {
            if let Some(offset) = atoms.offset_of(atom) {
                write!(out, "  {}@{offset}{}", c.dim, c.reset).unwrap();
            }
        }
        out.push('\n');
    }
    out
}

/// Dump the export table, resolving names when an atom table is given.
pub fn dump_exports(exports: &ExportTable, atoms: Option<&AtomTable>, config: &Config) -> String {
    let c = &config.colors;
    let w = width_for_count(exports.len());
    let mut out = String::new();

    writeln!(out, "{}[exports]{}", c.blue, c.reset).unwrap();
    for (i, export) in exports.iter().enumerate() {
        let (name, arity, label) = if config.hex {
            (
                format!("{:#x}", export.name),
                format!("{:#x}", export.arity),
                format!("{:#x}", export.label),
            )
        } else {
            (
                export.name.to_string(),
                export.arity.to_string(),
                export.label.to_string(),
            )
        };
        write!(out, "E{i:0w$} = (A{name}, {arity}) -> L{label}").unwrap();

        if let Some(atoms) = atoms
            && export.name < atoms.size()
        {
            let fun = atoms.at(export.name);
            write!(out, "{}  ; {fun}/{}{}", c.dim, export.arity, c.reset).unwrap();
        }
        out.push('\n');
    }
    out
}
