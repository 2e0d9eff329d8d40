//! Hygiene — keeps the panel core free of panics and silent error loss.
//!
//! Front ends rely on `submit` never unwinding: a panic there would leave the
//! panel stuck in `Pending`. These tests scan `panel/src/` (excluding
//! `*_test.rs`) and fail if any banned pattern shows up.

use std::fs;
use std::path::Path;

/// Pattern and the reason it is banned from production sources.
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics on None/Err"),
    ("panic!(", "panics"),
    ("unreachable!(", "panics"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "discards a value without inspecting it"),
    (".ok()", "drops the error of a Result"),
    ("#[allow(dead_code)]", "hides unused code"),
    ("println!(", "the core does no I/O"),
];

fn production_sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_are_found() {
    let files = production_sources();
    assert!(
        files.iter().any(|(path, _)| path.ends_with("state.rs")),
        "hygiene scan found no sources; run from the panel crate root"
    );
}

#[test]
fn banned_patterns_absent() {
    let files = production_sources();
    let mut violations = Vec::new();
    for (pattern, reason) in BANNED {
        for (path, content) in &files {
            for (index, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    violations.push(format!("  {path}:{}: `{pattern}` ({reason})", index + 1));
                }
            }
        }
    }
    assert!(violations.is_empty(), "banned patterns found:\n{}", violations.join("\n"));
}
