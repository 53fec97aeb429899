//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the canvas crate source tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first — the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    // Panics — these crash the wasm instance.
    Rule { pattern: ".unwrap()", budget: 0, why: "propagate or handle the error" },
    Rule { pattern: ".expect(", budget: 0, why: "propagate or handle the error" },
    Rule { pattern: "panic!(", budget: 0, why: "return an error instead" },
    Rule { pattern: "unreachable!(", budget: 0, why: "make the state unrepresentable" },
    Rule { pattern: "todo!(", budget: 0, why: "finish the stub" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "finish the stub" },
    // Silent loss — discards errors without inspecting.
    Rule { pattern: "let _ =", budget: 0, why: "inspect or log the result" },
    Rule { pattern: ".ok()", budget: 0, why: "inspect or log the error" },
    // Output goes through `log`, which the host routes to the console.
    Rule { pattern: "println!(", budget: 0, why: "use log::info!/debug!" },
    Rule { pattern: "eprintln!(", budget: 0, why: "use log::warn!/error!" },
    Rule { pattern: "web_sys::console", budget: 0, why: "use the log crate" },
    // Style / structure.
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete the dead code" },
];

/// Files allowed to talk to the 2D canvas API directly.
const CANVAS_API_FILES: &[&str] = &["engine.rs", "render.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `canvas/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the canvas crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let hits = count_in_source(&files, rule.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({}).\n{}",
                rule.pattern,
                rule.budget,
                rule.why,
                format_hits(&hits)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn canvas_api_stays_in_engine_and_render() {
    let files = source_files();
    let offenders: Vec<_> = count_in_source(&files, "CanvasRenderingContext2d")
        .into_iter()
        .filter(|(path, _)| !CANVAS_API_FILES.iter().any(|f| path.ends_with(f) || path.ends_with("lib.rs")))
        .collect();
    assert!(
        offenders.is_empty(),
        "CanvasRenderingContext2d used outside {CANVAS_API_FILES:?}:\n{}",
        format_hits(&offenders)
    );
}
