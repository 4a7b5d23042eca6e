#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use stone_merge::{MergeStep, PileSequence};

const UPDATE_VAR: &str = "STONE_MERGE_UPDATE_SNAPSHOTS";

fn snapshot_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join(name)
}

/// Compare rendered trace or call-graph text with `tests/snapshots/<name>`.
///
/// With `STONE_MERGE_UPDATE_SNAPSHOTS` set the file is rewritten instead.
pub fn assert_snapshot(name: &str, rendered: &str) {
    let path = snapshot_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::write(&path, rendered).expect("write snapshot");
        return;
    }

    let stored = fs::read_to_string(&path).unwrap_or_else(|err| {
        panic!("no stored rendering for {} ({}); run with {}=1", name, err, UPDATE_VAR)
    });
    let stored: Vec<&str> = stored.lines().collect();
    let rendered_lines: Vec<&str> = rendered.lines().collect();
    if stored == rendered_lines {
        return;
    }

    let line = stored
        .iter()
        .zip(&rendered_lines)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| stored.len().min(rendered_lines.len()));
    panic!(
        "rendering of {} drifted at line {}\n  stored:   {}\n  rendered: {}\nfull rendering:\n{}\nrun with {}=1 if the new output is intended",
        name,
        line + 1,
        stored.get(line).unwrap_or(&"<end>"),
        rendered_lines.get(line).unwrap_or(&"<end>"),
        rendered,
        UPDATE_VAR
    );
}

pub fn piles(weights: &[u64]) -> PileSequence {
    PileSequence::new(weights.to_vec()).expect("non-empty pile sequence")
}

/// One line per step, as the CLI prints them.
pub fn render_steps(steps: &[MergeStep]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("step {}\t{}\n", idx + 1, step))
        .collect()
}
