use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Domain-level validity check, run whenever a config crosses the file
/// boundary in either direction.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Reads a YAML config from `path`. A missing file is not an error and yields
/// the default config; unreadable, unparsable or invalid content is.
pub fn load_or_default<T>(path: &Path) -> Result<T, String>
where
    T: DeserializeOwned + Default + Validate,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: T = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

/// Validates `config` and writes it to `path` as YAML.
pub fn save<T>(path: &Path, config: &T) -> Result<(), String>
where
    T: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
