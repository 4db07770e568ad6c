//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `DSRESUME_<SECTION>__<KEY>`, e.g.
//!    `DSRESUME_RENDER__FORMAT=text`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use dsresume_adapters::TextOptions;
use dsresume_core::domain::{DocumentFormat, Media};

const ENV_PREFIX: &str = "DSRESUME";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `dsresume render`.
    pub render: RenderConfig,
    /// Status output settings.
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub format: DocumentFormat,
    pub media: Media,
    /// Text writer line width.
    pub width: usize,
    /// Text writer skill bar cells.
    pub bar_width: usize,
    /// Text writer contact pill columns.
    pub pill_width: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write log events to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let text = TextOptions::default();
        Self {
            render: RenderConfig {
                format: DocumentFormat::default(),
                media: Media::default(),
                width: text.width,
                bar_width: text.bar_width,
                pill_width: text.pill_width,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn text_options(&self) -> TextOptions {
        TextOptions {
            width: self.width,
            bar_width: self.bar_width,
            pill_width: self.pill_width,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// With `must_exist`, an explicit `config_file` that is missing is an
    /// error. The default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), must_exist),
            None => (Self::config_path(), false),
        };

        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("Invalid configuration values")?;

        debug!(
            path = %path.display(),
            format = %config.render.format,
            media = %config.render.media,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dsresume.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dsresume", "dsresume")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".dsresume.toml"))
    }

    /// The file this run reads: the `--config` override or the default.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Look up a dotted key and render its value for display.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "render.format" => self.render.format.to_string(),
            "render.media" => self.render.media.to_string(),
            "render.width" => self.render.width.to_string(),
            "render.bar_width" => self.render.bar_width.to_string(),
            "render.pill_width" => self.render.pill_width.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "logging.file" => self
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }
}
