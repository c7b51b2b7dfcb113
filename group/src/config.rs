//! Group configuration loaded from TOML.
//!
//! ```toml
//! apply_mode = "material_slot"
//!
//! [view]
//! show_all = true
//! show_hidden = false
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::view::OverrideView;

/// Where resolved property blocks are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyMode {
    /// One block per renderer. A renderer with several overridden materials
    /// ends up with the block of the last one applied.
    #[default]
    Renderer,
    /// One block per material slot of the renderer.
    MaterialSlot,
}

/// Override group settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    pub apply_mode: ApplyMode,
    /// Default listing options for inspector panels.
    pub view: OverrideView,
}

/// Errors that can occur while loading a [`GroupConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The content is not a valid configuration.
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}

/// Parse a configuration from TOML text. Missing keys take their defaults.
pub fn parse_config(content: &str) -> Result<GroupConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load a configuration file.
pub fn load_config(path: &Path) -> Result<GroupConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load a configuration file, falling back to defaults on any error.
pub fn load_or_default(path: &Path) -> GroupConfig {
    match load_config(path) {
        Ok(config) => {
            log::info!(
                "Loaded group config from {} (apply mode: {:?})",
                path.display(),
                config.apply_mode
            );
            config
        }
        Err(e) => {
            log::warn!("No group config ({e}), using defaults");
            GroupConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), GroupConfig::default());
        assert_eq!(GroupConfig::default().apply_mode, ApplyMode::Renderer);
    }

    #[test]
    fn parses_all_keys() {
        let config = parse_config(
            r#"
            apply_mode = "material_slot"

            [view]
            show_all = true
            "#,
        )
        .unwrap();
        assert_eq!(config.apply_mode, ApplyMode::MaterialSlot);
        assert!(config.view.show_all);
        assert!(!config.view.show_hidden);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = parse_config(r#"apply_mode = "per_pixel""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/overrides.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/overrides.toml"));
        assert_eq!(
            load_or_default(Path::new("/nonexistent/overrides.toml")),
            GroupConfig::default()
        );
    }
}
