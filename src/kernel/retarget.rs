//! Maps open views onto their new backing paths after a move.

use std::path::{Path, PathBuf};

use super::paths::normalize_for_compare;
use super::services::ports::{ViewId, ViewRef};

/// Views whose backing file moved from `from` to `to`, with their new paths.
///
/// A moved file retargets views whose normalized path equals `from`. A moved
/// directory retargets views strictly below it, keeping the remainder of the
/// path. Views elsewhere are left out of the plan.
pub fn plan_retarget(
    views: &[ViewRef],
    from: &Path,
    to: &Path,
    is_dir: bool,
) -> Vec<(ViewId, PathBuf)> {
    let from_norm = normalize_for_compare(from);
    let mut plan = Vec::new();

    for view in views {
        let Some(path) = view.path.as_ref() else {
            continue;
        };
        let path_norm = normalize_for_compare(path);

        if !is_dir {
            if path_norm == from_norm {
                plan.push((view.id, to.to_path_buf()));
            }
            continue;
        }

        if !path_norm.starts_with(&from_norm) || path_norm == from_norm {
            continue;
        }
        // Remainder comes from the unfolded path so its case survives.
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.clone());
        let rel: PathBuf = absolute.components().skip(from_norm.components().count()).collect();
        plan.push((view.id, to.join(rel)));
    }

    plan
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/retarget.rs"]
mod tests;
