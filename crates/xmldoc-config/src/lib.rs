//! Configuration management for xmldoc.
//!
//! Parses `xmldoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! heading_tag = "h2"
//! heading_class = "doc-section"
//! no_indentation = false
//! suppress_summary_heading = true
//! line_ending = "crlf"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use xmldoc_renderer::{DEFAULT_HEADING_TAG, LineEnding, RenderOptions};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override heading tag.
    pub heading_tag: Option<String>,
    /// Override heading CSS class.
    pub heading_class: Option<String>,
    /// Override pretty-printing.
    pub no_indentation: Option<bool>,
    /// Override summary heading suppression.
    pub suppress_summary_heading: Option<bool>,
    /// Override line ending.
    pub line_ending: Option<LineEnding>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "xmldoc.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering defaults.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering defaults (`[render]` section).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Tag used for section headings.
    pub heading_tag: String,
    /// CSS class for section headings.
    pub heading_class: Option<String>,
    /// Disable pretty-printing.
    pub no_indentation: bool,
    /// Omit the `summary` heading.
    pub suppress_summary_heading: bool,
    /// Newline used when pretty-printing.
    pub line_ending: LineEnding,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            heading_tag: DEFAULT_HEADING_TAG.to_owned(),
            heading_class: None,
            no_indentation: false,
            suppress_summary_heading: false,
            line_ending: LineEnding::Lf,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `xmldoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Render options for these settings, optionally targeting one section.
    #[must_use]
    pub fn render_options(&self, section: Option<&str>) -> RenderOptions {
        let render = &self.render;
        RenderOptions {
            section: section.map(str::to_owned),
            heading_tag: Some(render.heading_tag.clone()),
            heading_class: render.heading_class.clone(),
            no_indentation: render.no_indentation,
            suppress_summary_heading: render.suppress_summary_heading,
            line_ending: render.line_ending,
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tag = &self.render.heading_tag;
        if tag.is_empty() {
            return Err(ConfigError::Validation(
                "render.heading_tag cannot be empty".to_owned(),
            ));
        }
        if !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "render.heading_tag must be a plain tag name, got {tag:?}"
            )));
        }
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let render = &mut self.render;
        if let Some(tag) = &settings.heading_tag {
            render.heading_tag.clone_from(tag);
        }
        if let Some(class) = &settings.heading_class {
            render.heading_class = Some(class.clone());
        }
        if let Some(no_indentation) = settings.no_indentation {
            render.no_indentation = no_indentation;
        }
        if let Some(suppress) = settings.suppress_summary_heading {
            render.suppress_summary_heading = suppress;
        }
        if let Some(line_ending) = settings.line_ending {
            render.line_ending = line_ending;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.heading_tag, "h1");
        assert_eq!(config.render.heading_class, None);
        assert!(!config.render.no_indentation);
        assert!(!config.render.suppress_summary_heading);
        assert_eq!(config.render.line_ending, LineEnding::Lf);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.heading_tag, "h1");
    }

    #[test]
    fn test_parse_render_config() {
        let toml = r#"
[render]
heading_tag = "h2"
heading_class = "doc-section"
no_indentation = true
suppress_summary_heading = true
line_ending = "crlf"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.heading_tag, "h2");
        assert_eq!(config.render.heading_class.as_deref(), Some("doc-section"));
        assert!(config.render.no_indentation);
        assert!(config.render.suppress_summary_heading);
        assert_eq!(config.render.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_parse_invalid_line_ending() {
        let toml = r#"
[render]
line_ending = "cr"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_render_options() {
        let mut config = Config::default();
        config.render.heading_class = Some("doc".to_owned());
        config.render.no_indentation = true;

        let options = config.render_options(Some("summary"));
        assert_eq!(
            options,
            RenderOptions::new()
                .with_section("summary")
                .with_heading_tag("h1")
                .with_heading_class("doc")
                .without_indentation()
        );
        assert_eq!(config.render_options(None).section, None);
    }

    #[test]
    fn test_cli_settings_override() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            heading_tag: Some("h3".to_owned()),
            heading_class: None,
            no_indentation: Some(true),
            suppress_summary_heading: None,
            line_ending: Some(LineEnding::CrLf),
        });
        assert_eq!(config.render.heading_tag, "h3");
        assert!(config.render.no_indentation);
        assert!(!config.render.suppress_summary_heading);
        assert_eq!(config.render.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_validate_heading_tag() {
        let mut config = Config::default();
        config.render.heading_tag = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.render.heading_tag = "h1 onclick".to_owned();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.render.heading_tag = "h4".to_owned();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xmldoc.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_explicit_file_with_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xmldoc.toml");
        fs::write(&path, "[render]\nheading_tag = \"h2\"\n").unwrap();

        let settings = CliSettings {
            heading_class: Some("cli".to_owned()),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.render.heading_tag, "h2");
        assert_eq!(config.render.heading_class.as_deref(), Some("cli"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xmldoc.toml");
        fs::write(&path, "[render]\nheading_tag = \"\"\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_config(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }
}
