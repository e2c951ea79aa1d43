//! Configuration types and loading for merge-icons.
//!
//! Settings come from optional TOML files (global at
//! `~/.config/merge-icons/config.toml`, per-project `merge-icons.toml`), the
//! build-environment variables the tool is traditionally driven by, and the
//! command line. Everything is resolved once into a [`MergeConfig`] that the
//! merge engine receives by reference.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::ConfigLayer;
pub use types::MergeConfig;
pub use types::Overrides;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

impl ConfigLayer {
    /// Merges every layer below the command line: config files, then the
    /// environment. An explicit config file replaces the global and project
    /// files. Returns the merged layer and the files consulted.
    pub fn load(explicit: Option<&Path>) -> Result<(ConfigLayer, Vec<PathBuf>)> {
        let env = |name: &str| std::env::var(name).ok();
        let mut sources = Vec::new();

        let mut file_layer = ConfigLayer::default();
        if let Some(path) = explicit {
            file_layer = ConfigLayer::load_path(path)?;
            sources.push(path.to_path_buf());
        } else {
            if let Some((path, global)) = ConfigLayer::load_global()? {
                file_layer = global;
                sources.push(path);
            }
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            if let Some((path, project)) = ConfigLayer::load_project(&cwd)? {
                file_layer = file_layer.merge(project);
                sources.push(path);
            }
        }
        file_layer.resolve_substitutions(&env);

        Ok((file_layer.merge(ConfigLayer::from_env(env)), sources))
    }
}

impl MergeConfig {
    /// Load config with precedence: command line > environment > project > global.
    pub fn load(explicit: Option<&Path>, overrides: &Overrides) -> Result<MergeConfig> {
        let (layer, sources) = ConfigLayer::load(explicit)?;
        let config = layer.resolve(overrides)?;
        tracing::debug!(?config, ?sources, "configuration resolved");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::merge::IconResolution;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_from_env() {
        let layer = ConfigLayer::from_env(env_of(&[
            ("out", "/nix/store/out"),
            ("themeName", "merged"),
            ("iconThemes", " /a/share/icons/A \n /b/share/icons/B "),
            ("hicolor", "/nix/store/hicolor"),
            ("removeLegacyIcons", "1"),
        ]));
        assert_eq!(layer.out.as_deref(), Some("/nix/store/out"));
        assert_eq!(
            layer.icon_themes,
            Some(vec![
                "/a/share/icons/A".to_string(),
                "/b/share/icons/B".to_string()
            ])
        );
        assert_eq!(layer.remove_legacy_icons, Some(true));
    }

    #[test]
    fn test_remove_legacy_only_for_one() {
        for value in ["true", "0", "yes", ""] {
            let layer = ConfigLayer::from_env(env_of(&[("removeLegacyIcons", value)]));
            assert_eq!(layer.remove_legacy_icons, Some(false), "value {:?}", value);
        }
        assert_eq!(ConfigLayer::from_env(env_of(&[])).remove_legacy_icons, None);
    }

    #[test]
    fn test_merge_prefers_upper_layer() {
        let lower = ConfigLayer {
            out: Some("/lower".into()),
            theme_name: Some("lower".into()),
            remove_legacy_icons: Some(true),
            ..Default::default()
        };
        let upper = ConfigLayer {
            out: Some("/upper".into()),
            ..Default::default()
        };
        let merged = lower.merge(upper);
        assert_eq!(merged.out.as_deref(), Some("/upper"));
        assert_eq!(merged.theme_name.as_deref(), Some("lower"));
        assert_eq!(merged.remove_legacy_icons, Some(true));
    }

    #[test]
    fn test_resolve_requires_out() {
        let layer = ConfigLayer {
            theme_name: Some("t".into()),
            hicolor: Some("/h".into()),
            ..Default::default()
        };
        let err = layer.resolve(&Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { key: "out", .. }));
    }

    #[test]
    fn test_resolve_overrides_win() {
        let layer = ConfigLayer {
            out: Some("/env-out".into()),
            theme_name: Some("env".into()),
            icon_themes: Some(vec!["/env/A".into()]),
            hicolor: Some("/h".into()),
            ..Default::default()
        };
        let overrides = Overrides {
            out: Some(PathBuf::from("/cli-out")),
            icon_themes: vec![PathBuf::from("/cli/B"), PathBuf::from("/cli/C")],
            icon_resolution: Some(IconResolution::Exclusive),
            ..Default::default()
        };
        let config = layer.resolve(&overrides).unwrap();
        assert_eq!(config.out, PathBuf::from("/cli-out"));
        assert_eq!(config.theme_name, "env");
        assert_eq!(
            config.icon_themes,
            vec![PathBuf::from("/cli/B"), PathBuf::from("/cli/C")]
        );
        assert_eq!(config.icon_resolution, IconResolution::Exclusive);
        assert!(!config.remove_legacy_icons);
        assert_eq!(
            config.merged_theme_root(),
            PathBuf::from("/cli-out/share/icons/env")
        );
        assert_eq!(
            config.hicolor_theme_root(),
            PathBuf::from("/h/share/icons/hicolor")
        );
    }

    #[test]
    fn test_load_path_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merge-icons.toml");
        std::fs::write(
            &path,
            "theme_name = \"desktop\"\nicon_themes = [\"/a\", \"/b\"]\nicon_resolution = \"exclusive\"\n",
        )
        .unwrap();

        let layer = ConfigLayer::load_path(&path).unwrap();
        assert_eq!(layer.theme_name.as_deref(), Some("desktop"));
        assert_eq!(layer.icon_themes.map(|t| t.len()), Some(2));
        assert_eq!(layer.icon_resolution, Some(IconResolution::Exclusive));
    }

    #[test]
    fn test_load_path_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merge-icons.toml");
        std::fs::write(&path, "colour = \"red\"\n").unwrap();
        assert!(matches!(
            ConfigLayer::load_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_project_walks_up_to_git_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join("merge-icons.toml"), "theme_name = \"proj\"\n").unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let (path, layer) = ConfigLayer::load_project(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join("merge-icons.toml"));
        assert_eq!(layer.theme_name.as_deref(), Some("proj"));
    }
}
