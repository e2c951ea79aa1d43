//! Environment variable substitution and final validation.

use std::path::PathBuf;

use super::types::{ConfigLayer, MergeConfig, Overrides};
use crate::constants::{ENV_HICOLOR, ENV_OUT, ENV_THEME_NAME};
use crate::error::ConfigError;

impl ConfigLayer {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub fn resolve_substitutions(&mut self, lookup: &dyn Fn(&str) -> Option<String>) {
        for field in [&mut self.out, &mut self.theme_name, &mut self.hicolor] {
            if let Some(value) = field {
                *value = resolve_str(value, lookup);
            }
        }
        if let Some(themes) = &mut self.icon_themes {
            for theme in themes.iter_mut() {
                *theme = resolve_str(theme, lookup);
            }
        }
    }

    /// Applies command-line overrides and checks required settings.
    pub fn resolve(self, overrides: &Overrides) -> Result<MergeConfig, ConfigError> {
        let out = overrides
            .out
            .clone()
            .or_else(|| self.out.map(PathBuf::from))
            .ok_or(ConfigError::Missing { key: "out", env: ENV_OUT })?;
        let theme_name = overrides
            .theme_name
            .clone()
            .or(self.theme_name)
            .ok_or(ConfigError::Missing {
                key: "theme_name",
                env: ENV_THEME_NAME,
            })?;
        let hicolor = overrides
            .hicolor
            .clone()
            .or_else(|| self.hicolor.map(PathBuf::from))
            .ok_or(ConfigError::Missing {
                key: "hicolor",
                env: ENV_HICOLOR,
            })?;

        let icon_themes = if overrides.icon_themes.is_empty() {
            self.icon_themes
                .unwrap_or_default()
                .into_iter()
                .map(PathBuf::from)
                .collect()
        } else {
            overrides.icon_themes.clone()
        };

        let icon_resolution = overrides
            .icon_resolution
            .or(self.icon_resolution)
            .unwrap_or_default();

        Ok(MergeConfig {
            out,
            theme_name,
            icon_themes,
            hicolor,
            remove_legacy_icons: overrides.remove_legacy_icons
                || self.remove_legacy_icons.unwrap_or(false),
            icon_resolution,
        })
    }
}

/// Replace {env:VAR} with the environment variable value.
fn resolve_str(s: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(start) = result[from..].find("{env:").map(|i| i + from) {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 5..start + end];
        let value = lookup(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
        from = start + value.len();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "PREFIX" => Some("/nix/store/abc".into()),
            "LOOP" => Some("{env:LOOP}".into()),
            _ => None,
        }
    }

    #[test]
    fn test_resolve_str() {
        assert_eq!(resolve_str("{env:PREFIX}/out", &lookup), "/nix/store/abc/out");
        assert_eq!(resolve_str("{env:UNSET}x", &lookup), "x");
        assert_eq!(resolve_str("plain", &lookup), "plain");
        assert_eq!(resolve_str("{env:broken", &lookup), "{env:broken");
        assert_eq!(resolve_str("{env:LOOP}", &lookup), "{env:LOOP}");
    }

    #[test]
    fn test_substitution_covers_theme_list() {
        let mut layer = ConfigLayer {
            icon_themes: Some(vec!["{env:PREFIX}/share/icons/Papirus".into()]),
            hicolor: Some("{env:PREFIX}".into()),
            ..Default::default()
        };
        layer.resolve_substitutions(&lookup);
        assert_eq!(layer.hicolor.as_deref(), Some("/nix/store/abc"));
        assert_eq!(
            layer.icon_themes,
            Some(vec!["/nix/store/abc/share/icons/Papirus".to_string()])
        );
    }
}
