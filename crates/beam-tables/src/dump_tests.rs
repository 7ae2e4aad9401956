//! Tests for table dumps.

use crate::{AtomTable, Config, ExportTable, dump, dump_atoms, dump_exports};

fn fac_module() -> (AtomTable, ExportTable) {
    let mut atoms = AtomTable::new();
    for atom in [
        "fac",
        "state",
        "erlang",
        "-",
        "*",
        "module_info",
        "get_module_info",
    ] {
        atoms.put(atom);
    }

    let mut exports = ExportTable::new();
    exports.put(atoms.index_of("fac"), 1, 2);
    exports.put(atoms.index_of("module_info"), 0, 4);
    exports.put(atoms.index_of("module_info"), 1, 6);

    (atoms, exports)
}

#[test]
fn dump_atoms_plain() {
    let (atoms, _) = fac_module();

    insta::assert_snapshot!(dump_atoms(&atoms, &Config::new()), @r#"
    [atoms]
    A0 "fac"
    A1 "state"
    A2 "erlang"
    A3 "-"
    A4 "*"
    A5 "module_info"
    A6 "get_module_info"
    "#);
}

#[test]
fn dump_atoms_with_offsets() {
    let (atoms, _) = fac_module();
    let config = Config::new().offsets(true);

    insta::assert_snapshot!(dump_atoms(&atoms, &config), @r#"
    [atoms]
    A0 "fac"  @4
    A1 "state"  @8
    A2 "erlang"  @14
    A3 "-"  @21
    A4 "*"  @23
    A5 "module_info"  @25
    A6 "get_module_info"  @37
    "#);
}

#[test]
fn dump_atoms_pads_indices() {
    let mut atoms = AtomTable::new();
    for i in 0..11 {
        atoms.put(&format!("a{i}"));
    }

    let out = dump_atoms(&atoms, &Config::new());

    assert!(out.contains("A00 \"a0\"\n"));
    assert!(out.contains("A10 \"a10\"\n"));
}

#[test]
fn dump_exports_unresolved() {
    let mut exports = ExportTable::new();
    exports.put(0x2021, 1, 0xc1f2);

    insta::assert_snapshot!(dump_exports(&exports, None, &Config::new()), @r"
    [exports]
    E0 = (A8225, 1) -> L49650
    ");
}

#[test]
fn dump_exports_hex() {
    let mut exports = ExportTable::new();
    exports.put(0x2021, 1, 0xc1f2);
    let config = Config::new().hex(true);

    insta::assert_snapshot!(dump_exports(&exports, None, &config), @r"
    [exports]
    E0 = (A0x2021, 0x1) -> L0xc1f2
    ");
}

#[test]
fn dump_both_tables() {
    let (mut atoms, mut exports) = fac_module();
    atoms.put("main");
    // Name index past the atom table stays unresolved.
    exports.put(99, 0, 8);

    insta::assert_snapshot!(dump(&atoms, &exports, &Config::new()), @r#"
    [atoms]
    A0 "fac"
    A1 "state"
    A2 "erlang"
    A3 "-"
    A4 "*"
    A5 "module_info"
    A6 "get_module_info"
    A7 "main"

    [exports]
    E0 = (A0, 1) -> L2  ; fac/1
    E1 = (A5, 0) -> L4  ; module_info/0
    E2 = (A5, 1) -> L6  ; module_info/1
    E3 = (A99, 0) -> L8
    "#);
}

#[test]
fn dump_empty_tables() {
    let out = dump(&AtomTable::new(), &ExportTable::new(), &Config::new());

    assert_eq!(out, "[atoms]\n\n[exports]\n");
}

#[test]
fn dump_colored() {
    let (atoms, exports) = fac_module();
    let config = Config::new().colored(true);

    let out = dump(&atoms, &exports, &config);

    assert!(out.starts_with("\x1b[34m[atoms]\x1b[0m\n"));
    assert!(out.contains("A0 \x1b[32m\"fac\"\x1b[0m\n"));
    assert!(out.contains("\x1b[2m  ; fac/1\x1b[0m"));
}
