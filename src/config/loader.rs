use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::FigcodeError;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load configuration from explicit files or the site's default config files.
///
/// Files are merged in order, later keys overriding earlier ones.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> Result<Config, FigcodeError> {
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    let mut merged = Value::Object(Default::default());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let file_value = read_config_file(&path)?;
            merge_values(&mut merged, file_value);
        }
    }

    let config: Config = serde_json::from_value(merged)
        .map_err(|e| FigcodeError::Config(format!("Invalid codeblock configuration: {}", e)))?;

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Parse one configuration file into a generic value tree
fn read_config_file(config_path: &Path) -> Result<Value, FigcodeError> {
    if !config_path.exists() {
        return Err(FigcodeError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        FigcodeError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let value = match ext.as_str() {
        "toml" => toml::from_str::<Value>(&content).map_err(|e| {
            FigcodeError::Config(format!(
                "Failed to parse TOML configuration ({}): {}",
                config_path.display(),
                e
            ))
        })?,
        // YAML is also assumed when there is no extension
        "yml" | "yaml" | "" => parse_yaml(&content, config_path)?,
        other => {
            return Err(FigcodeError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            )));
        }
    };

    Ok(value)
}

fn parse_yaml(content: &str, path: &Path) -> Result<Value, FigcodeError> {
    // An empty _config.yml deserializes to null
    if content.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    let value = serde_yaml::from_str::<Value>(content).map_err(|e| {
        FigcodeError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })?;

    Ok(match value {
        Value::Null => Value::Object(Default::default()),
        other => other,
    })
}

/// Deep-merge `overlay` into `base`; objects merge key by key, anything else
/// replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
