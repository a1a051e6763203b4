//! Configuration management for mdpages.
//!
//! Parses `mdpages.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Relative paths
//! are resolved against the config file's directory; with no config file
//! at all, the defaults are relative to the current working directory so
//! a bare `mdpages` invocation works in a project root.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdpages.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the README source path.
    pub readme: Option<PathBuf>,
    /// Override the site output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the binary asset source directory.
    pub dist_dir: Option<PathBuf>,
    /// Override the site title.
    pub title: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration as parsed from TOML (paths are relative strings).
    site: SiteConfigRaw,
    /// Download link entries for the generated downloads section.
    pub download: Vec<Download>,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    title: Option<String>,
    readme: Option<String>,
    template: Option<String>,
    output_dir: Option<String>,
    dist_dir: Option<String>,
    skip_title: Option<bool>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Page title used in the template chrome.
    pub title: String,
    /// README source path.
    pub readme: PathBuf,
    /// Page template override. None means the embedded default template.
    pub template: Option<PathBuf>,
    /// Output directory for the generated site.
    pub output_dir: PathBuf,
    /// Source directory of pre-built binaries to bundle.
    pub dist_dir: PathBuf,
    /// Drop the README's leading title line (it is repeated in the page
    /// chrome).
    pub skip_title: bool,
}

/// A download link entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Download {
    /// Human-readable link label, e.g. "Linux (AMD64)".
    pub label: String,
    /// File name within the bundled asset directory.
    pub file: String,
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

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdpages.toml` in current directory and
    /// parents, falling back to pure defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(readme) = &settings.readme {
            self.site_resolved.readme.clone_from(readme);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(dist_dir) = &settings.dist_dir {
            self.site_resolved.dist_dir.clone_from(dist_dir);
        }
        if let Some(title) = &settings.title {
            self.site_resolved.title.clone_from(title);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            download: Vec::new(),
            site_resolved: SiteConfig {
                title: "Project".to_owned(),
                readme: base.join("README.md"),
                template: None,
                output_dir: base.join("docs-site"),
                dist_dir: base.join("dist"),
                skip_title: true,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.title, "site.title")?;
        for (index, entry) in self.download.iter().enumerate() {
            require_non_empty(&entry.label, &format!("download[{index}].label"))?;
            require_non_empty(&entry.file, &format!("download[{index}].file"))?;
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            title: self
                .site
                .title
                .clone()
                .unwrap_or_else(|| "Project".to_owned()),
            readme: resolve(self.site.readme.as_deref(), "README.md"),
            template: self.site.template.as_deref().map(|t| config_dir.join(t)),
            output_dir: resolve(self.site.output_dir.as_deref(), "docs-site"),
            dist_dir: resolve(self.site.dist_dir.as_deref(), "dist"),
            skip_title: self.site.skip_title.unwrap_or(true),
        };
    }
}
