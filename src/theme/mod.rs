//! In-memory model of an icon theme's `index.theme` file.
//!
//! A [`ThemeDescriptor`] is read from disk (or built up field by field for
//! the merged theme), exposes typed accessors over the `[Icon Theme]`
//! section, and serializes back to the same ini-like text.

mod fields;
mod parse;
mod sections;

pub use sections::{Section, Sections};

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::ICON_THEME_SECTION;
use crate::error::{MergeError, ParseError};

/// One theme's metadata plus the directory it lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Raw section/key data, in file order.
    pub sections: Sections,
    /// Directory containing `index.theme`; icon paths are relative to it.
    pub root: PathBuf,
}

impl ThemeDescriptor {
    /// Creates an empty descriptor with no root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `index.theme` text. The root is left empty.
    pub fn parse(contents: &str) -> Result<Self, ParseError> {
        Ok(Self {
            sections: parse::parse_sections(contents)?,
            root: PathBuf::new(),
        })
    }

    /// Reads and parses an `index.theme` file, rooting the theme at its directory.
    pub fn read(index_path: &Path) -> Result<Self, MergeError> {
        let contents = fs::read_to_string(index_path)
            .map_err(|e| MergeError::io("read", index_path, e))?;
        let mut theme = Self::parse(&contents).map_err(|source| MergeError::MalformedThemeFile {
            path: index_path.to_path_buf(),
            source,
        })?;
        theme.root = index_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        tracing::debug!(
            path = %index_path.display(),
            sections = theme.sections.len(),
            "read theme index"
        );
        Ok(theme)
    }

    /// Renders the descriptor as `index.theme` text.
    pub fn serialize(&self) -> String {
        self.sections.to_string()
    }

    /// Writes the serialized descriptor to `path`.
    pub fn write(&self, path: &Path) -> Result<(), MergeError> {
        fs::write(path, self.serialize()).map_err(|e| MergeError::io("write", path, e))
    }

    /// Per-directory section data (e.g. `[16x16/apps]`), if declared.
    pub fn directory_section(&self, directory: &str) -> Option<&Section> {
        self.sections.section(directory)
    }

    fn icon_theme_value(&self, key: &str) -> Option<&str> {
        self.sections.get(ICON_THEME_SECTION, key)
    }

    fn set_icon_theme_value(&mut self, key: &str, value: String) {
        self.sections.set(ICON_THEME_SECTION, key, value);
    }
}
