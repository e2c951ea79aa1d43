//! Icon discovery and identity grouping across themes.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use super::IconResolution;
use crate::constants::{CONTEXT_KEY, ICON_EXTENSIONS};
use crate::error::MergeError;
use crate::theme::ThemeDescriptor;

/// The logical identity of an icon: its directory context plus its
/// extension-less file name. Files sharing an identity are "the same icon".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconIdentity {
    pub context: String,
    pub name: String,
}

impl fmt::Display for IconIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.context, self.name)
    }
}

/// A physical icon file one theme offers for an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCandidate {
    /// Root directory of the providing theme.
    pub theme_root: PathBuf,
    /// Path of the icon relative to the theme root (and to the merged root).
    pub relative: PathBuf,
}

impl IconCandidate {
    /// Where the icon lives inside its own theme.
    pub fn source_path(&self) -> PathBuf {
        self.theme_root.join(&self.relative)
    }
}

/// Candidates per identity, in discovery order.
pub type IconIndex = IndexMap<IconIdentity, Vec<IconCandidate>>;

/// Scans every declared directory of `theme` for `.png`/`.svg` files.
///
/// Declared directories that do not exist on disk are skipped. A theme
/// with several directories yielding the same identity keeps all of them.
pub fn known_icons(theme: &ThemeDescriptor) -> Result<IconIndex, MergeError> {
    let mut icons = IconIndex::new();

    for directory in theme.directories() {
        let dir_path = theme.root.join(&directory);
        if !dir_path.is_dir() {
            tracing::debug!(path = %dir_path.display(), "declared directory missing, skipping");
            continue;
        }
        let context = theme
            .directory_section(&directory)
            .and_then(|section| section.get(CONTEXT_KEY))
            .cloned()
            .unwrap_or_default();

        for file_name in sorted_entries(&dir_path)? {
            let Some(stem) = icon_stem(&file_name) else {
                continue;
            };
            let identity = IconIdentity {
                context: context.clone(),
                name: stem.into_owned(),
            };
            icons.entry(identity).or_default().push(IconCandidate {
                theme_root: theme.root.clone(),
                relative: Path::new(&directory).join(&file_name),
            });
        }
    }

    tracing::debug!(
        root = %theme.root.display(),
        identities = icons.len(),
        "scanned theme icons"
    );
    Ok(icons)
}

/// Folds per-theme indexes, lowest priority first, into one.
///
/// [`IconResolution::Layered`] appends later candidates after earlier ones;
/// [`IconResolution::Exclusive`] lets a later theme replace an identity's
/// candidates outright.
pub fn merge_icon_indexes(
    indexes: impl IntoIterator<Item = IconIndex>,
    resolution: IconResolution,
) -> IconIndex {
    let mut merged = IconIndex::new();
    for index in indexes {
        for (identity, candidates) in index {
            match resolution {
                IconResolution::Layered => merged.entry(identity).or_default().extend(candidates),
                IconResolution::Exclusive => {
                    merged.insert(identity, candidates);
                }
            }
        }
    }
    merged
}

/// File names in `dir`, sorted so scans are reproducible. Names are kept
/// as raw OS strings so non UTF-8 icons still get linked.
fn sorted_entries(dir: &Path) -> Result<Vec<OsString>, MergeError> {
    let mut names = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| MergeError::io("list", dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| MergeError::io("list", dir, e))?;
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}

/// Strips a recognized icon extension, or `None` for non-icons.
///
/// The stem only names the identity, so invalid UTF-8 is replaced lossily.
fn icon_stem(file_name: &OsStr) -> Option<Cow<'_, str>> {
    let bytes = file_name.as_bytes();
    ICON_EXTENSIONS
        .iter()
        .find_map(|ext| bytes.strip_suffix(ext.as_bytes()))
        .map(String::from_utf8_lossy)
}
