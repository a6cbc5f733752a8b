//! Override loading and in-place config merging.
//!
//! The merge streams the target file line by line, swaps the value of any
//! setting that has a differing override, and leaves every other byte alone.
//! The whole output is buffered in memory first; the target is only replaced
//! (atomically, via a temp file in the same directory) when at least one
//! value actually changed.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::MergeError;
use crate::parse::{parse_line, ConfigLine};

/// Desired key -> value replacements, built once per run and read-only after.
pub type OverrideMap = HashMap<String, String>;

/// Outcome of a merge: whether anything changed, plus the full output lines.
#[derive(Debug)]
pub struct MergeResult {
    pub changed: bool,
    pub lines: Vec<String>,
}

/// Read an overrides file into an [`OverrideMap`].
///
/// Every line that parses as a setting contributes `key -> value`; later
/// duplicates overwrite earlier ones. Non-setting lines contribute nothing.
pub fn load_overrides(path: &Path) -> Result<OverrideMap, MergeError> {
    let content = fs::read_to_string(path).map_err(|e| MergeError::from_read(path, e))?;

    let mut overrides = OverrideMap::new();
    for line in content.split_inclusive('\n') {
        if let ConfigLine::Setting { key, value, .. } = parse_line(line) {
            overrides.insert(key.to_string(), value.to_string());
        }
    }

    debug!(count = overrides.len(), path = %path.display(), "loaded overrides");
    Ok(overrides)
}

/// Merge `overrides` into `content`, preserving line order and every
/// non-rewritten byte.
///
/// A setting is rewritten as `key=value\n` only when its key is overridden
/// with a *different* value; a rewritten line always ends in a single `\n`
/// regardless of the source terminator. Override keys absent from the content
/// are ignored — this never appends new settings. Repeated keys in the
/// content are each evaluated independently.
pub fn merge_content(content: &str, overrides: &OverrideMap) -> MergeResult {
    let mut changed = false;
    let mut lines = Vec::new();

    for line in content.split_inclusive('\n') {
        match parse_line(line) {
            ConfigLine::Setting { key, value, raw } => match overrides.get(key) {
                Some(new_value) if new_value != value => {
                    debug!(key, "rewriting setting");
                    lines.push(format!("{}={}\n", key, new_value));
                    changed = true;
                }
                _ => lines.push(raw.to_string()),
            },
            ConfigLine::PassThrough(raw) => lines.push(raw.to_string()),
        }
    }

    MergeResult { changed, lines }
}

/// Merge `overrides` into the file at `target`, rewriting it in place.
///
/// The target is replaced atomically, and only when the merge changed at
/// least one value; an unchanged target is never opened for writing, so its
/// timestamps and permissions stay untouched. On a successful rewrite a
/// `* <path> written` notice is printed for the operator.
pub fn merge_into(target: &Path, overrides: &OverrideMap) -> Result<MergeResult, MergeError> {
    let content = fs::read_to_string(target).map_err(|e| MergeError::from_read(target, e))?;

    let result = merge_content(&content, overrides);
    if result.changed {
        replace_contents(target, &result.lines)?;
        println!("* {} written", target.display());
    } else {
        debug!(path = %target.display(), "no settings changed, leaving file untouched");
    }

    Ok(result)
}

/// Replace the whole file at `target` with `lines`, atomically.
///
/// Writes to a temp file in the target's directory, carries the target's
/// permissions over, then renames into place. A failure anywhere leaves the
/// prior file visible.
fn replace_contents(target: &Path, lines: &[String]) -> Result<(), MergeError> {
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| MergeError::from_write(target, e))?;
    for line in lines {
        tmp.write_all(line.as_bytes()).map_err(|e| MergeError::from_write(target, e))?;
    }

    let perms = fs::metadata(target).map_err(|e| MergeError::from_write(target, e))?.permissions();
    tmp.as_file().set_permissions(perms).map_err(|e| MergeError::from_write(target, e))?;

    tmp.persist(target).map_err(|e| MergeError::from_write(target, e.error))?;
    Ok(())
}
