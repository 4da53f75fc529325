// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for how `btk-pc` substitutes tokens in the generated files.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;
use yare::parameterized;

const BTK_IN: &str = include_str!("../fixtures/btk+-2.0.pc.in");
const BDK_IN: &str = include_str!("../fixtures/bdk-2.0.pc.in");
const BAIL_IN: &str = include_str!("../fixtures/bail.pc.in");

const OUTPUTS: [&str; 3] = ["btk+-2.0.pc", "bdk-2.0.pc", "bail.pc"];

fn btk_pc() -> Command {
    let mut cmd = cargo_bin_cmd!("btk-pc");
    cmd.env_remove("BTK_PC_LOG");
    cmd
}

/// Temp dir with `src/` (templates), `out/` and `prefix/`.
fn setup(templates: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for dir in ["src", "out", "prefix"] {
        fs::create_dir(temp.path().join(dir)).unwrap();
    }
    for (name, body) in templates {
        fs::write(temp.path().join("src").join(name), body).unwrap();
    }
    temp
}

fn fixtures() -> TempDir {
    setup(&[
        ("btk+-2.0.pc.in", BTK_IN),
        ("bdk-2.0.pc.in", BDK_IN),
        ("bail.pc.in", BAIL_IN),
    ])
}

fn run(root: &Path, src: &Path, out: &Path, host: &str) {
    btk_pc()
        .arg("--host")
        .arg(host)
        .arg("--prefix")
        .arg(root.join("prefix"))
        .args(["--version", "2.24.33"])
        .arg("--srcdir")
        .arg(out)
        .arg("--top-srcdir")
        .arg(src)
        .assert()
        .success();
}

fn run_default(temp: &TempDir, host: &str) {
    let root = temp.path();
    run(root, &root.join("src"), &root.join("out"), host);
}

fn read(temp: &TempDir, name: &str) -> String {
    fs::read_to_string(temp.path().join("out").join(name)).unwrap()
}

// =============================================================================
// Host substitution
// =============================================================================

#[parameterized(
    mingw32 = { "i686-w64-mingw32" },
    mingw64 = { "x86_64-w64-mingw32" },
    msvc = { "x86_64-pc-windows-msvc" },
    arbitrary = { "anything goes" },
)]
fn host_is_substituted_verbatim(host: &str) {
    let temp = setup(&[
        ("btk+-2.0.pc.in", "name: @host@\n"),
        ("bdk-2.0.pc.in", "name: @host@\n"),
        ("bail.pc.in", "name: @host@\n"),
    ]);
    run_default(&temp, host);

    assert_eq!(read(&temp, "btk+-2.0.pc"), format!("name: {host}\n"));
    assert_eq!(read(&temp, "bdk-2.0.pc"), format!("name: {host}\n"));
    // bail.pc has no @host@ entry, so the token survives
    assert_eq!(read(&temp, "bail.pc"), "name: @host@\n");
}

// =============================================================================
// Token coverage
// =============================================================================

#[test]
fn known_tokens_are_all_replaced() {
    let temp = fixtures();
    run_default(&temp, "i686-w64-mingw32");

    for name in OUTPUTS {
        let out = read(&temp, name);
        assert!(
            !out.contains('@'),
            "{} still has a token:\n{}",
            name,
            out
        );
    }
}

#[test]
fn btk_file_has_literal_values() {
    let temp = fixtures();
    run_default(&temp, "i686-w64-mingw32");

    let btk = read(&temp, "btk+-2.0.pc");
    for line in [
        "target=win32",
        "btk_binary_version=2.10.0",
        "btk_host=i686-w64-mingw32",
        "Version: 2.24.33",
        "Requires: bdk-${target}-2.0 batk >= 1.29.2 bdk-pixbuf-2.0 >= 2.21.0 bio-2.0 >= 2.28.0",
        "Requires.private: batk",
        "Libs: -L${libdir} -lbtk-${target}-2.0 ",
        "Cflags: -I${includedir}/btk-2.0 ",
    ] {
        assert!(
            btk.lines().any(|l| l == line),
            "missing line {:?} in:\n{}",
            line,
            btk
        );
    }
}

#[test]
fn empty_value_keeps_adjacent_whitespace() {
    let temp = setup(&[
        ("btk+-2.0.pc.in", "a @BTK_EXTRA_LIBS@ b\n\t@BTK_EXTRA_CFLAGS@\t\n"),
        ("bdk-2.0.pc.in", "x\n"),
        ("bail.pc.in", "y\n"),
    ]);
    run_default(&temp, "i686-w64-mingw32");

    assert_eq!(read(&temp, "btk+-2.0.pc"), "a  b\n\t\t\n");
}

#[test]
fn unknown_tokens_are_copied_unchanged() {
    let temp = setup(&[
        ("btk+-2.0.pc.in", "@NOT_A_KNOWN_TOKEN@ user@example.com ${prefix}\n"),
        ("bdk-2.0.pc.in", "x\n"),
        ("bail.pc.in", "y\n"),
    ]);
    run_default(&temp, "i686-w64-mingw32");

    assert_eq!(
        read(&temp, "btk+-2.0.pc"),
        "@NOT_A_KNOWN_TOKEN@ user@example.com ${prefix}\n"
    );
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn rendering_rendered_output_is_a_noop() {
    let temp = fixtures();
    run_default(&temp, "i686-w64-mingw32");

    // Feed the outputs back in as templates.
    let again_src: PathBuf = temp.path().join("again-src");
    let again_out: PathBuf = temp.path().join("again-out");
    fs::create_dir(&again_src).unwrap();
    fs::create_dir(&again_out).unwrap();
    for name in OUTPUTS {
        fs::write(again_src.join(format!("{name}.in")), read(&temp, name)).unwrap();
    }

    run(temp.path(), &again_src, &again_out, "i686-w64-mingw32");

    for name in OUTPUTS {
        let second = fs::read_to_string(again_out.join(name)).unwrap();
        similar_asserts::assert_eq!(read(&temp, name), second);
    }
}
