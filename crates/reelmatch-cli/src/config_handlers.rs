//! Handler functions for config CLI commands.
//!
//! Implements the `config` subcommands (`path`, `show`, `get`, `set`, `init`)
//! over [`ReelmatchConfig`], plus TOML dotted-key helpers.

use crate::cli::ConfigAction;
use crate::config::ReelmatchConfig;
use reelmatch_core::{Error, Result};
use std::path::PathBuf;

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => cmd_config_show(config_path),
        ConfigAction::Get { key } => {
            println!("{}", cmd_config_get(config_path, &key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            cmd_config_init(target, force).map(|_| ())
        }
    }
}

/// Prints where the config is read from.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = ReelmatchConfig::resolve_config_path(config_path);
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `reelmatch config init` to create it)");
    }
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<()> {
    let config = ReelmatchConfig::load(config_path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Get a configuration value by dotted key, formatted for display.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = ReelmatchConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Set a configuration value by dotted key in the config file.
///
/// The edited file must still parse as a valid configuration.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = ReelmatchConfig::resolve_config_path(config_path);
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `reelmatch config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    let check: ReelmatchConfig = toml::from_str(&toml_str)
        .map_err(|e| Error::config(format!("'{key}' = {value} is not valid: {e}")))?;
    check.recommend.validate()?;

    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Create a default configuration file, returning its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = ReelmatchConfig::resolve_config_path(file);

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
    }

    let toml_str = ReelmatchConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(path)
}

/// Looks up `section.key` style paths.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Writes `value` at a dotted path. Missing sections are created.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(Error::config("Empty key path"));
    };

    let mut current = root;
    for part in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Reads a command-line value as the most specific TOML scalar it spells:
/// boolean, then integer, then float, falling back to a string.
pub fn parse_value(raw: &str) -> toml::Value {
    match raw {
        "true" | "false" => toml::Value::Boolean(raw == "true"),
        _ => raw
            .parse::<i64>()
            .map(toml::Value::Integer)
            .or_else(|_| raw.parse::<f64>().map(toml::Value::Float))
            .unwrap_or_else(|_| toml::Value::String(raw.to_string())),
    }
}

/// Renders a value the way `config get` prints it. Strings lose their quotes.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        scalar => scalar.to_string(),
    }
}
