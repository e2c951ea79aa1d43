//! Writes the merged symlink farm to disk.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Component, Path, PathBuf};

use super::icons::IconIndex;
use crate::error::MergeError;
use crate::theme::ThemeDescriptor;

/// An icon whose source could not be resolved and was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingIcon {
    pub source: PathBuf,
}

/// Outcome of linking every candidate into the merged tree.
#[derive(Debug, Default)]
pub struct LinkReport {
    /// Symlinks created, counting ones later overwritten by another theme.
    pub linked: usize,
    pub dangling: Vec<DanglingIcon>,
}

/// Creates the merged root and every directory any theme declares.
///
/// Existing directories are kept. Any component of a declared directory
/// left behind as a symlink (e.g. a neutralized `legacy` dir from a previous
/// run) is turned back into a real directory, so nothing is created through
/// a link pointing outside `merged_root`.
pub fn create_directories(merged_root: &Path, themes: &[ThemeDescriptor]) -> Result<(), MergeError> {
    fs::create_dir_all(merged_root).map_err(|e| MergeError::io("create", merged_root, e))?;
    for theme in themes {
        for directory in theme.directories() {
            ensure_dir(merged_root, Path::new(&directory))?;
        }
    }
    Ok(())
}

/// Symlinks every candidate into `merged_root`, in index order.
///
/// Later candidates at the same relative path replace earlier links, which
/// is how higher-priority themes win. Sources that no longer resolve are
/// skipped with a warning.
pub fn link_icons(merged_root: &Path, icons: &IconIndex) -> Result<LinkReport, MergeError> {
    let mut report = LinkReport::default();

    for candidate in icons.values().flatten() {
        let source = candidate.source_path();
        let target = match fs::canonicalize(&source) {
            Ok(path) => path,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %source.display(), "skipping dangling icon source");
                report.dangling.push(DanglingIcon { source });
                continue;
            }
            Err(e) => return Err(MergeError::io("resolve", &source, e)),
        };

        force_symlink(&target, &merged_root.join(&candidate.relative))?;
        report.linked += 1;
    }

    Ok(report)
}

/// Creates a symlink at `link`, replacing any file or symlink already there.
pub(super) fn force_symlink(target: &Path, link: &Path) -> Result<(), MergeError> {
    if let Ok(meta) = fs::symlink_metadata(link) {
        if !meta.is_dir() {
            fs::remove_file(link).map_err(|e| MergeError::io("replace", link, e))?;
        }
    }
    symlink(target, link).map_err(|e| MergeError::io("symlink", link, e))
}

/// Walks `relative` from `merged_root` down, unlinking symlinked components
/// before creating each level as a real directory. Only plain name
/// components are followed.
fn ensure_dir(merged_root: &Path, relative: &Path) -> Result<(), MergeError> {
    let mut path = merged_root.to_path_buf();
    for component in relative.components() {
        let Component::Normal(name) = component else {
            continue;
        };
        path.push(name);
        if fs::symlink_metadata(&path).is_ok_and(|meta| meta.file_type().is_symlink()) {
            fs::remove_file(&path).map_err(|e| MergeError::io("replace", &path, e))?;
        }
        if !path.is_dir() {
            fs::create_dir(&path).map_err(|e| MergeError::io("create", &path, e))?;
        }
    }
    Ok(())
}
