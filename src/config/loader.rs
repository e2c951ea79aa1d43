//! File and environment loading for merge-icons configuration.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::ConfigLayer;
use crate::constants::{
    ENV_HICOLOR, ENV_ICON_THEMES, ENV_OUT, ENV_REMOVE_LEGACY_ICONS, ENV_THEME_NAME,
    PROJECT_CONFIG_FILENAME,
};
use crate::error::ConfigError;

impl ConfigLayer {
    /// Reads one TOML config file.
    pub fn load_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `~/.config/merge-icons/config.toml` if it exists.
    pub(super) fn load_global() -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let layer = Self::load_path(&path)?;
        Ok(Some((path, layer)))
    }

    /// Look for merge-icons.toml in `start`, then walk up to the git root.
    pub(super) fn load_project(start: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                let layer = Self::load_path(&candidate)?;
                return Ok(Some((candidate, layer)));
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Reads the build-environment variables (`out`, `themeName`,
    /// `iconThemes`, `hicolor`, `removeLegacyIcons`) through `lookup`.
    ///
    /// `iconThemes` is whitespace separated. `removeLegacyIcons` is only
    /// true when set to `"1"`.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            out: lookup(ENV_OUT),
            theme_name: lookup(ENV_THEME_NAME),
            icon_themes: lookup(ENV_ICON_THEMES)
                .map(|list| list.split_whitespace().map(str::to_string).collect()),
            hicolor: lookup(ENV_HICOLOR),
            remove_legacy_icons: lookup(ENV_REMOVE_LEGACY_ICONS).map(|v| v == "1"),
            icon_resolution: None,
        }
    }

    /// Merge `over` on top of `self`. Values present in `over` win.
    pub fn merge(self, over: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            out: over.out.or(self.out),
            theme_name: over.theme_name.or(self.theme_name),
            icon_themes: over.icon_themes.or(self.icon_themes),
            hicolor: over.hicolor.or(self.hicolor),
            remove_legacy_icons: over.remove_legacy_icons.or(self.remove_legacy_icons),
            icon_resolution: over.icon_resolution.or(self.icon_resolution),
        }
    }
}
