//! Path helpers shared by the side-bar commands.
//!
//! - `resolve_relative`: path relative to the first matching project root
//! - `split_extension`: stem / multi-part extension split of a file name
//! - `name_selection`: char range pre-selected in rename-like prompts

use std::path::{is_separator, Path, PathBuf};

/// Resolves `path` against the first root in `roots` that contains it.
///
/// Roots are matched component-wise in iteration order and the first match
/// wins, even when a later root is a longer (nested) prefix. When no root
/// matches the result is the basename of `path`.
pub fn resolve_relative(path: &Path, roots: &[PathBuf]) -> PathBuf {
    for root in roots {
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            break;
        }
        return rel.to_path_buf();
    }
    PathBuf::from(basename(path))
}

/// Last segment of `path`, or the whole path when it has none (e.g. `/`).
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Splits a file name into `(stem, extension)`.
///
/// The extension is every `.segment` group after the stem, so
/// `archive.tar.gz` gives `("archive", ".tar.gz")`. Leading dots belong to
/// the stem, which keeps `.bashrc` and `..foo` whole.
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].find('.') {
        Some(pos) => name.split_at(leading_dots + pos),
        None => (name, ""),
    }
}

/// `stem + suffix + extension`, the default answer of a duplicate prompt.
pub fn duplicate_name(name: &str, suffix: &str) -> String {
    let (stem, ext) = split_extension(name);
    format!("{stem}{suffix}{ext}")
}

/// Char range of the stem of the last path segment in `text`.
///
/// Offsets count chars, not bytes, since prompt regions are char based.
/// A name without extension is selected whole.
pub fn name_selection(text: &str) -> (usize, usize) {
    let leaf_start = text
        .char_indices()
        .filter(|(_, ch)| is_separator(*ch))
        .last()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .unwrap_or(0);
    let leaf = &text[leaf_start..];
    let (stem, _) = split_extension(leaf);

    let start = text[..leaf_start].chars().count();
    (start, start + stem.chars().count())
}

/// Absolute, case-normalized form used to compare view paths.
///
/// Lexical only: symlinks are not resolved and missing paths are fine.
pub fn normalize_for_compare(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    fold_case(absolute)
}

/// Case folding of the platform's default filesystem (Windows only).
#[cfg(windows)]
pub(crate) fn fold_case(path: PathBuf) -> PathBuf {
    PathBuf::from(path.to_string_lossy().to_lowercase())
}

#[cfg(not(windows))]
pub(crate) fn fold_case(path: PathBuf) -> PathBuf {
    path
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/paths.rs"]
mod tests;
