//! Insertion-ordered section/key storage for `index.theme` data.

use indexmap::IndexMap;
use std::fmt;

/// Keys and values of a single `[Section]`, in the order first seen.
pub type Section = IndexMap<String, String>;

/// All sections of a theme file, in the order first seen.
///
/// Re-inserting an existing section or key replaces its value but keeps its
/// original position, so serialization stays stable across merges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    inner: IndexMap<String, Section>,
}

impl Sections {
    /// Looks up a section without creating it.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.inner.get(name)
    }

    /// Returns the named section, creating an empty one at the end if absent.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.inner.entry(name.to_string()).or_default()
    }

    /// Reads `key` from `section`, if both exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key).map(String::as_str)
    }

    /// Stores `key=value` in `section`, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.section_mut(section)
            .insert(key.to_string(), value.into());
    }

    /// Replaces a whole section. No per-key merge with earlier content.
    pub fn replace_section(&mut self, name: &str, data: Section) {
        self.inner.insert(name.to_string(), data);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.inner.iter().map(|(name, data)| (name.as_str(), data))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Writes the `index.theme` text form.
///
/// Every section is followed by a blank separator; the final separator
/// collapses into the file's trailing newline.
impl fmt::Display for Sections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.inner.len().saturating_sub(1);
        for (i, (name, data)) in self.inner.iter().enumerate() {
            writeln!(f, "[{}]", name)?;
            for (key, value) in data {
                writeln!(f, "{}={}", key, value)?;
            }
            if i != last {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
