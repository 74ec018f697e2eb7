//! `sitecraft config`: inspect the effective configuration.

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys that exist but are unset by default, so absent from the TOML view.
const OPTIONAL_KEYS: &[&str] = &[
    "assets.archive_url",
    "assets.excluded_entry",
    "assets.script_url",
    "logging.file",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.print(&config.to_toml().map_err(config_error)?)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn config_error(e: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    }
}

/// Look up a dotted key such as `presets.lang`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let found = key
        .split('.')
        .try_fold(&root, |value, segment| value.get(segment));

    match found {
        Some(value) => Ok(render(value)),
        None if OPTIONAL_KEYS.contains(&key) => Ok(String::new()),
        None => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

fn render(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(" "),
        toml::Value::Table(table) => toml::to_string_pretty(table).unwrap_or_default(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
