//! Centralized constants for merge-icons.
//!
//! File names, well-known theme keys and fixed labels live here so they can
//! be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "merge-icons";

/// Configuration filename under the XDG config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "merge-icons.toml";

// --- Icon theme format ---

/// Metadata file every icon theme root carries.
pub const INDEX_FILENAME: &str = "index.theme";

/// Section holding the theme-wide fields (name, directories, ...).
pub const ICON_THEME_SECTION: &str = "Icon Theme";

/// Per-directory key naming the icon category.
pub const CONTEXT_KEY: &str = "Context";

/// File extensions recognized as icons when scanning theme directories.
pub const ICON_EXTENSIONS: &[&str] = &[".png", ".svg"];

/// Location of the fallback theme relative to the `hicolor` prefix.
pub const HICOLOR_THEME_PATH: &str = "share/icons/hicolor";

/// Location of merged themes relative to the output prefix.
pub const OUTPUT_ICONS_PATH: &str = "share/icons";

// --- Merged theme identity ---

/// `Name` written into the merged `index.theme`.
pub const MERGED_THEME_NAME: &str = "Merged icons";

/// `Example` written into the merged `index.theme`.
pub const MERGED_THEME_EXAMPLE: &str = "folder";

/// Prefix of the generated `Comment`.
pub const MERGED_COMMENT_PREFIX: &str = "Merged icons from: ";

// --- Legacy icons ---

/// Directory name swept away when legacy icons are removed.
pub const LEGACY_DIR_NAME: &str = "legacy";

/// Always-empty location legacy directories are pointed at.
pub const EMPTY_DIR: &str = "/var/empty";

// --- Environment ---

pub const ENV_OUT: &str = "out";
pub const ENV_THEME_NAME: &str = "themeName";
pub const ENV_ICON_THEMES: &str = "iconThemes";
pub const ENV_HICOLOR: &str = "hicolor";
pub const ENV_REMOVE_LEGACY_ICONS: &str = "removeLegacyIcons";

// --- Exit codes ---

/// Exit status when requested themes lack an `index.theme`.
pub const EXIT_MISSING_THEMES: u8 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;
