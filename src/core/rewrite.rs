//! Path rewrite engine — find and replace a literal path in a project file.
//!
//! Given a `RewriteSpec` (from → to), this engine:
//! 1. Scans the file contents for exact, non-overlapping matches
//! 2. Replaces every match at its original offset
//! 3. Writes the updated contents back to disk (only when matches exist)

use crate::error::{Error, Result};
use crate::utils::io;
use serde::Serialize;
use std::path::Path;

// ============================================================================
// Types
// ============================================================================

/// A literal rewrite specification. `from` is matched exactly, with no
/// boundary detection.
#[derive(Debug, Clone)]
pub struct RewriteSpec {
    pub from: String,
    pub to: String,
}

impl RewriteSpec {
    pub fn new(from: &str, to: &str) -> Result<Self> {
        if from.is_empty() {
            return Err(Error::validation_invalid_argument(
                "from",
                "Search path must not be empty",
            ));
        }

        Ok(RewriteSpec {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// The result of one rewrite pass over the target file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteOutcome {
    /// File the rewrite ran against.
    pub file: String,
    /// Non-overlapping occurrences of `from` found before replacement.
    pub occurrences: usize,
    /// Whether updated contents were written back to disk.
    pub applied: bool,
}

// ============================================================================
// Matching
// ============================================================================

/// Find all non-overlapping occurrences of `term` in `text`, scanning left
/// to right. Each match consumes its full length, so a later match never
/// starts inside an earlier one.
pub fn find_occurrences(text: &str, term: &str) -> Vec<usize> {
    let mut matches = Vec::new();
    let term_len = term.len();

    if term_len == 0 || term_len > text.len() {
        return matches;
    }

    let mut start = 0;
    while let Some(pos) = text[start..].find(term) {
        let abs = start + pos;
        matches.push(abs);
        start = abs + term_len;
    }

    matches
}

/// Count non-overlapping occurrences of `term` in `text`.
pub fn count_occurrences(text: &str, term: &str) -> usize {
    find_occurrences(text, term).len()
}

// ============================================================================
// Replacement
// ============================================================================

/// Replace every occurrence of `spec.from` in `text` with `spec.to`,
/// returning the updated text and the number of replacements made.
///
/// Replacements are applied from the last offset to the first so earlier
/// offsets stay valid. Replacement text is never rescanned: when `to`
/// contains `from`, the returned count is the pre-replacement count.
pub fn replace_all(text: &str, spec: &RewriteSpec) -> (String, usize) {
    let matches = find_occurrences(text, &spec.from);
    if matches.is_empty() {
        return (text.to_string(), 0);
    }

    let mut updated = text.to_string();
    for &pos in matches.iter().rev() {
        updated.replace_range(pos..pos + spec.from.len(), &spec.to);
    }

    (updated, matches.len())
}

// ============================================================================
// File operation
// ============================================================================

/// Run one rewrite pass: read the file in full, replace every occurrence,
/// and overwrite the file with the result. When nothing matches, the file
/// is left byte-for-byte untouched.
///
/// The write is a plain non-atomic overwrite. A failure between read and
/// write leaves the file unchanged, but nothing guards against the file
/// changing underneath the pass.
pub fn rewrite_file(path: &Path, spec: &RewriteSpec) -> Result<RewriteOutcome> {
    log_status!("rewrite", "Scanning {} for '{}'", path.display(), spec.from);

    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let (updated, occurrences) = replace_all(&content, spec);

    let applied = occurrences > 0;
    if applied {
        io::write_file(path, &updated, &format!("write {}", path.display()))?;
    }

    Ok(RewriteOutcome {
        file: path.display().to_string(),
        occurrences,
        applied,
    })
}

// ============================================================================
// Tests
// ============================================================================
