//! The merge engine: folds an ordered list of icon themes into one.
//!
//! Themes are processed lowest priority first (hicolor, then the requested
//! themes in order). Every icon file found is symlinked into the merged
//! root; when two themes provide the same relative path the later link
//! replaces the earlier one, which is how higher priority wins on disk.
//! The merged `index.theme` is built with the same layering.

mod icons;
mod legacy;
mod materialize;
mod metadata;

pub use icons::known_icons;
pub use materialize::DanglingIcon;

use icons::merge_icon_indexes;
use legacy::neutralize_legacy_dirs;
use materialize::{create_directories, link_icons};
use metadata::merged_descriptor;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::MergeConfig;
use crate::constants::INDEX_FILENAME;
use crate::error::MergeError;
use crate::theme::ThemeDescriptor;

/// How candidates for one icon identity combine across themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IconResolution {
    /// Keep every theme's files; later themes overwrite same-path links.
    #[default]
    Layered,
    /// A later theme providing an identity drops all earlier files for it.
    Exclusive,
}

/// What a merge run produced.
#[derive(Debug)]
pub struct MergeSummary {
    pub merged_root: PathBuf,
    /// Names of the merged themes, lowest priority first.
    pub theme_names: Vec<String>,
    pub identities: usize,
    pub linked: usize,
    pub dangling: Vec<DanglingIcon>,
    pub legacy_replaced: Vec<PathBuf>,
}

/// Checks that every requested root has an `index.theme`.
///
/// All roots are checked before failing so the error lists every offender.
pub fn validate_theme_roots(roots: &[PathBuf]) -> Result<(), MergeError> {
    let missing: Vec<PathBuf> = roots
        .iter()
        .filter(|root| !root.join(INDEX_FILENAME).exists())
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MergeError::MissingThemeIndex { roots: missing })
    }
}

/// Reads the `index.theme` of every root, keeping the given order.
pub fn load_themes(roots: &[PathBuf]) -> Result<Vec<ThemeDescriptor>, MergeError> {
    roots
        .iter()
        .map(|root| ThemeDescriptor::read(&root.join(INDEX_FILENAME)))
        .collect()
}

/// Runs a full merge as described by `config`.
///
/// Nothing is written before every requested theme has been validated and
/// parsed. Re-running over an existing output converges to the same tree.
pub fn run(config: &MergeConfig) -> Result<MergeSummary, MergeError> {
    validate_theme_roots(&config.icon_themes)?;

    let mut roots = vec![config.hicolor_theme_root()];
    roots.extend(config.icon_themes.iter().cloned());
    let themes = load_themes(&roots)?;
    tracing::info!(themes = themes.len(), "loaded icon themes");

    let indexes = themes
        .iter()
        .map(known_icons)
        .collect::<Result<Vec<_>, _>>()?;
    let icons = merge_icon_indexes(indexes, config.icon_resolution);

    let merged_root = config.merged_theme_root();
    create_directories(&merged_root, &themes)?;
    let links = link_icons(&merged_root, &icons)?;
    tracing::info!(
        root = %merged_root.display(),
        identities = icons.len(),
        linked = links.linked,
        dangling = links.dangling.len(),
        "linked icons"
    );

    merged_descriptor(&themes).write(&merged_root.join(INDEX_FILENAME))?;

    let legacy_replaced = if config.remove_legacy_icons {
        neutralize_legacy_dirs(&merged_root)?
    } else {
        Vec::new()
    };

    Ok(MergeSummary {
        theme_names: themes.iter().map(display_name).collect(),
        merged_root,
        identities: icons.len(),
        linked: links.linked,
        dangling: links.dangling,
        legacy_replaced,
    })
}

/// Theme name for reports, falling back to the root's directory name.
pub fn display_name(theme: &ThemeDescriptor) -> String {
    theme
        .name()
        .map(str::to_string)
        .or_else(|| {
            theme
                .root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| theme.root.display().to_string())
}
