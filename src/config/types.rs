//! Struct definitions for merge-icons configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{HICOLOR_THEME_PATH, OUTPUT_ICONS_PATH};
use crate::merge::IconResolution;

/// One configuration layer, as read from a TOML file or the environment.
///
/// Every field is optional; layers are merged field by field and the
/// result is checked by [`ConfigLayer::resolve`](super::ConfigLayer).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    /// Output prefix; the theme lands in `<out>/share/icons/<theme_name>`.
    pub out: Option<String>,
    /// Directory name of the merged theme.
    pub theme_name: Option<String>,
    /// Theme roots to merge, lowest priority first.
    pub icon_themes: Option<Vec<String>>,
    /// Prefix holding `share/icons/hicolor`, always merged first.
    pub hicolor: Option<String>,
    /// Replace `legacy` directories with an empty symlink.
    pub remove_legacy_icons: Option<bool>,
    /// How icons of the same identity from several themes combine.
    pub icon_resolution: Option<IconResolution>,
}

/// Values given on the command line. They beat every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub out: Option<PathBuf>,
    pub theme_name: Option<String>,
    /// Replaces the configured theme list when non-empty.
    pub icon_themes: Vec<PathBuf>,
    pub hicolor: Option<PathBuf>,
    pub remove_legacy_icons: bool,
    pub icon_resolution: Option<IconResolution>,
}

/// Fully resolved settings handed to the merge engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeConfig {
    pub out: PathBuf,
    pub theme_name: String,
    pub icon_themes: Vec<PathBuf>,
    pub hicolor: PathBuf,
    pub remove_legacy_icons: bool,
    pub icon_resolution: IconResolution,
}

impl MergeConfig {
    /// `<out>/share/icons/<theme_name>`.
    pub fn merged_theme_root(&self) -> PathBuf {
        self.out.join(OUTPUT_ICONS_PATH).join(&self.theme_name)
    }

    /// `<hicolor>/share/icons/hicolor`, the lowest-priority theme.
    pub fn hicolor_theme_root(&self) -> PathBuf {
        self.hicolor.join(HICOLOR_THEME_PATH)
    }
}
