//! XDG path resolution for merge-icons configuration.

use std::path::PathBuf;

use super::types::ConfigLayer;

impl ConfigLayer {
    /// Returns the platform-specific configuration directory for merge-icons.
    ///
    /// Returns `~/.config/merge-icons/` on Linux (`XDG_CONFIG_HOME/merge-icons`),
    /// or `None` in build sandboxes without a home directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(crate::constants::APP_NAME))
    }

    /// Returns the full path to the global configuration file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(crate::constants::CONFIG_FILENAME))
    }
}
