//! Neutralizes the `legacy` icon tier of a merged theme.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::materialize::force_symlink;
use crate::constants::{EMPTY_DIR, LEGACY_DIR_NAME};
use crate::error::MergeError;

/// Replaces every `legacy` directory under `merged_root` with a symlink to
/// an always-empty location. Returns the replaced paths.
pub fn neutralize_legacy_dirs(merged_root: &Path) -> Result<Vec<PathBuf>, MergeError> {
    let pattern = format!(
        "{}/**/{}",
        glob::Pattern::escape(&merged_root.to_string_lossy()),
        LEGACY_DIR_NAME
    );
    let paths = glob::glob(&pattern)
        .map_err(|e| MergeError::io("search", merged_root, io::Error::other(e)))?;

    let mut found = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => found.push(path),
            Err(e) => tracing::warn!(error = %e, "unreadable path during legacy sweep"),
        }
    }

    let mut replaced = Vec::new();
    for dir in found {
        // Nested matches disappear with their parent.
        let Ok(meta) = fs::symlink_metadata(&dir) else {
            continue;
        };
        if !meta.is_dir() {
            continue;
        }
        fs::remove_dir_all(&dir).map_err(|e| MergeError::io("remove", &dir, e))?;
        force_symlink(Path::new(EMPTY_DIR), &dir)?;
        tracing::info!(path = %dir.display(), "replaced legacy icon directory");
        replaced.push(dir);
    }

    Ok(replaced)
}
