//! Breaks a rationale blob into thought steps.
//!
//! A new step starts at a blank line, at a line opening with a numbered-list
//! marker (`1.`, `2)`), or at a markdown heading line. Segments are trimmed
//! and empty ones dropped.

use regex::Regex;
use std::sync::LazyLock;

static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\d+[.)](?:\s|$)").expect("regex should compile"));

static MARKDOWN_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*#{1,6}(?:\s|$)").expect("regex should compile"));

/// Split `text` into ordered, trimmed, non-empty step strings.
pub fn split_steps(text: &str) -> Vec<String> {
    let mut steps = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut steps);
            continue;
        }
        if starts_new_step(line) {
            flush(&mut current, &mut steps);
        }
        current.push(line);
    }
    flush(&mut current, &mut steps);

    steps
}

fn starts_new_step(line: &str) -> bool {
    NUMBERED_MARKER.is_match(line) || MARKDOWN_HEADING.is_match(line)
}

fn flush(current: &mut Vec<&str>, steps: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let joined = current.join("\n");
    current.clear();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        steps.push(trimmed.to_string());
    }
}
