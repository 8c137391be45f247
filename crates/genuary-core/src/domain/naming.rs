//! Folder naming and the shared template-copy filter.
//!
//! Folder names must be deterministic: re-running the tool against the same
//! prompts has to derive the same names, or the skip-if-exists rule breaks.

use std::path::Path;

use crate::domain::prompt::PromptRecord;

/// Basenames excluded from every template copy — both when staging a local
/// source directory and when fanning the resolved template out into sketch
/// directories. Dependency caches get reinstalled per sketch; VCS metadata
/// must not be duplicated 31 times.
pub const IGNORED_TEMPLATE_DIRS: &[&str] = &["node_modules", ".git"];

/// Whether a path from the template should be copied.
pub fn template_copy_filter(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(base) => !IGNORED_TEMPLATE_DIRS.contains(&base),
        None => true,
    }
}

/// Normalize a string for filesystem-safe folder names.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `_`, trims leading/trailing underscores. Falls back to `"sketch"`
/// when nothing survives.
pub fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_sep = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    if out.is_empty() { "sketch".into() } else { out }
}

/// Derive the sketch folder name for the prompt at `index` (0-based).
///
/// Zero-padded day number plus the sanitized shorthand, falling back through
/// name and date, and finally to `day-NN` (which sanitizes to `day_NN`).
pub fn sketch_folder_name(index: usize, prompt: &PromptRecord) -> String {
    let day = format!("{:02}", index + 1);
    let label = prompt
        .shorthand
        .as_deref()
        .or(prompt.name.as_deref())
        .or(prompt.date.as_deref())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("day-{day}"));
    format!("{day}_{}", sanitize(&label))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
