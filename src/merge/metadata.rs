//! Builds the `index.theme` of the merged theme.

use std::collections::HashSet;

use crate::constants::{
    ICON_THEME_SECTION, MERGED_COMMENT_PREFIX, MERGED_THEME_EXAMPLE, MERGED_THEME_NAME,
};
use crate::theme::ThemeDescriptor;

/// Folds theme metadata, lowest priority first, into one descriptor.
///
/// Directory lists are rebuilt at every step as the current theme's list
/// followed by the accumulated one, deduplicated by first occurrence, so
/// the last theme's ordering ends up at the front. Per-directory sections
/// are replaced whole by later themes.
pub fn merged_descriptor(themes: &[ThemeDescriptor]) -> ThemeDescriptor {
    let mut merged = ThemeDescriptor::new();
    merged.set_name(MERGED_THEME_NAME);
    merged.set_example(MERGED_THEME_EXAMPLE);
    merged.set_comment(merged_comment(themes));

    for theme in themes {
        let directories = prepend_unique(theme.directories(), merged.directories());
        merged.set_directories(&directories);
        let scaled = prepend_unique(theme.scaled_directories(), merged.scaled_directories());
        merged.set_scaled_directories(&scaled);

        for (name, data) in theme.sections.iter() {
            if name == ICON_THEME_SECTION {
                continue;
            }
            merged.sections.replace_section(name, data.clone());
        }
    }

    merged
}

/// "Merged icons from: " plus theme names, highest priority first.
fn merged_comment(themes: &[ThemeDescriptor]) -> String {
    let names: Vec<&str> = themes
        .iter()
        .rev()
        .map(|theme| theme.name().unwrap_or_default())
        .collect();
    format!("{}{}", MERGED_COMMENT_PREFIX, names.join(", "))
}

fn prepend_unique(front: Vec<String>, back: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    front
        .into_iter()
        .chain(back)
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(text: &str) -> ThemeDescriptor {
        ThemeDescriptor::parse(text).unwrap()
    }

    #[test]
    fn test_prepend_unique() {
        let out = prepend_unique(
            vec!["32x32".into(), "48x48".into()],
            vec!["16x16".into(), "32x32".into()],
        );
        assert_eq!(out, vec!["32x32", "48x48", "16x16"]);
    }

    #[test]
    fn test_directory_lists_last_theme_leads() {
        let a = theme("[Icon Theme]\nName=A\nDirectories=16x16,32x32\n");
        let b = theme("[Icon Theme]\nName=B\nDirectories=32x32,48x48\nScaledDirectories=32x32@2\n");
        let merged = merged_descriptor(&[a, b]);
        assert_eq!(merged.directories(), vec!["32x32", "48x48", "16x16"]);
        assert_eq!(merged.scaled_directories(), vec!["32x32@2"]);
    }

    #[test]
    fn test_identity_fields() {
        let hicolor = theme("[Icon Theme]\nName=Hicolor\n");
        let a = theme("[Icon Theme]\nName=A\n");
        let b = theme("[Icon Theme]\nName=B\n");
        let merged = merged_descriptor(&[hicolor, a, b]);
        assert_eq!(merged.name(), Some("Merged icons"));
        assert_eq!(merged.example(), Some("folder"));
        assert_eq!(merged.comment(), Some("Merged icons from: B, A, Hicolor"));
    }

    #[test]
    fn test_sections_replaced_whole() {
        let a = theme("[Icon Theme]\nName=A\n[16x16]\nContext=Apps\nSize=16\n[32x32]\nSize=32\n");
        let b = theme("[Icon Theme]\nName=B\n[16x16]\nContext=Places\n");
        let merged = merged_descriptor(&[a, b]);

        let section = merged.directory_section("16x16").unwrap();
        assert_eq!(section.len(), 1);
        assert_eq!(section.get("Context"), Some(&"Places".to_string()));
        assert!(merged.directory_section("32x32").is_some());

        let order: Vec<&str> = merged.sections.iter().map(|(n, _)| n).collect();
        assert_eq!(order, vec!["Icon Theme", "16x16", "32x32"]);
    }

    #[test]
    fn test_empty_lists_still_written() {
        let merged = merged_descriptor(&[theme("[Icon Theme]\nName=A\n")]);
        assert_eq!(
            merged.serialize(),
            "[Icon Theme]\nName=Merged icons\nExample=folder\nComment=Merged icons from: A\nDirectories=\nScaledDirectories=\n"
        );
    }
}
