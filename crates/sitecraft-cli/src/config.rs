//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only ever sees the resolved
//! [`ScaffoldOptions`](sitecraft_core::prelude::ScaffoldOptions) and
//! [`AssetSources`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags and prompt answers (handled in `commands::new`)
//! 2. Environment variables, `SITECRAFT__SECTION__KEY`
//! 3. `--config FILE`, or else `./.sitecraft.toml` over the user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use sitecraft_core::prelude::AssetSources;

use crate::cli::OutputFormat;

/// File name used by `sitecraft init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".sitecraft.toml";

const ENV_PREFIX: &str = "SITECRAFT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a value is neither given as a flag nor prompted for.
    pub presets: Presets,
    /// Output settings.
    pub output: OutputConfig,
    /// Where third-party assets are downloaded from.
    pub assets: AssetConfig,
    /// Optional log file.
    pub logging: LoggingConfig,
}

/// Preset answers for `sitecraft new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presets {
    pub title: String,
    pub description: String,
    pub url: String,
    pub lang: String,
    pub direction: String,
    pub opengraph: bool,
    pub colors: Vec<String>,
    pub sections: Vec<String>,
    pub jquery: bool,
    pub htaccess: bool,
    pub robots: bool,
    pub sitemap: bool,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            title: "New Materialize website".into(),
            description: "Generated with sitecraft".into(),
            url: "www.example.com".into(),
            lang: "en".into(),
            direction: "ltr".into(),
            opengraph: true,
            colors: Vec::new(),
            sections: vec!["first".into(), "second".into(), "third".into()],
            jquery: true,
            htaccess: true,
            robots: true,
            sitemap: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub archive_url: Option<String>,
    pub excluded_entry: Option<String>,
    pub script_url: Option<String>,
}

impl AssetConfig {
    /// Pinned sources with any configured overrides applied.
    pub fn sources(&self) -> AssetSources {
        let mut sources = AssetSources::default();
        if let Some(url) = &self.archive_url {
            sources.framework_archive_url = url.clone();
        }
        if let Some(entry) = &self.excluded_entry {
            sources.excluded_entry = entry.clone();
        }
        if let Some(url) = &self.script_url {
            sources.script_library_url = url.clone();
        }
        sources
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// JSON log lines are appended here when set.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, layering files and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path, true)),
            None => builder
                .add_source(toml_file(&Self::config_path(), false))
                .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE), false)),
        };

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("presets.colors")
                    .with_list_parse_key("presets.sections"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sitecraft.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sitecraft", "sitecraft")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Rendered as the contents of a fresh config file.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}

fn toml_file(path: &Path, required: bool) -> impl config::Source + Send + Sync + 'static {
    File::from(path).format(FileFormat::Toml).required(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_presets() {
        let presets = Presets::default();
        assert_eq!(presets.title, "New Materialize website");
        assert_eq!(presets.lang, "en");
        assert_eq!(presets.sections, ["first", "second", "third"]);
        assert!(presets.colors.is_empty());
        assert!(presets.jquery && presets.htaccess && presets.robots && presets.sitemap);
    }

    #[test]
    fn default_sources_are_pinned() {
        assert_eq!(AssetConfig::default().sources(), AssetSources::default());
    }

    #[test]
    fn asset_overrides_apply() {
        let assets = AssetConfig {
            archive_url: Some("http://mirror.test/m.zip".into()),
            excluded_entry: None,
            script_url: Some("http://mirror.test/jq.js".into()),
        };
        let sources = assets.sources();
        assert_eq!(sources.framework_archive_url, "http://mirror.test/m.zip");
        assert_eq!(sources.script_library_url, "http://mirror.test/jq.js");
        assert_eq!(sources.excluded_entry, AssetSources::EXCLUDED_ENTRY);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitecraft.toml");
        fs::write(
            &path,
            "[presets]\nlang = \"fr\"\nsections = [\"intro\"]\njquery = false\n\n[output]\nformat = \"plain\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.presets.lang, "fr");
        assert_eq!(cfg.presets.sections, ["intro"]);
        assert!(!cfg.presets.jquery);
        assert_eq!(cfg.presets.title, Presets::default().title);
        assert_eq!(cfg.output.format, OutputFormat::Plain);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn toml_rendering_round_trips() {
        let text = AppConfig::default().to_toml().unwrap();
        assert!(text.contains("[presets]"));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
