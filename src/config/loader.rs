use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AiroiConfig;
use crate::errors::{Error, Result};

/// Name of the configuration file looked up in the directory hierarchy.
pub const CONFIG_FILE_NAME: &str = ".airoi.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<AiroiConfig, String> {
    let config = toml::from_str::<AiroiConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    config
        .validate()
        .map_err(|problems| format!("Invalid configuration: {}", problems.join("; ")))?;

    Ok(config)
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<AiroiConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::config(path, format!("cannot read file: {}", e)))?;
    let config = parse_and_validate_config(&contents).map_err(|e| Error::config(path, e))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file. Failures are reported and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AiroiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory and its ancestors, nearest first, up to `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find and load the nearest config file above `start`.
pub fn discover_config(start: PathBuf) -> AiroiConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AiroiConfig::default()
        })
}

/// Config for this run: the explicit file if given, otherwise the nearest
/// discovered one, otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AiroiConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}. Using default config.", e);
            Ok(AiroiConfig::default())
        }
    }
}
