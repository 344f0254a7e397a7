use crate::error::TaskError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKTRACKER_CONFIG_PATH";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Alternate location for the backing store. The store-path environment
    /// variable still wins over this.
    #[serde(default)]
    pub store_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<TaskError>,
}

pub fn config_path() -> Result<PathBuf, TaskError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| TaskError::io("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("tasktracker")
            .join(CONFIG_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| TaskError::io("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("tasktracker")
            .join(CONFIG_FILE_NAME))
    }
}

pub fn load_config() -> Result<Config, TaskError> {
    let path = config_path()?;
    load_config_from_path(&path)
}

/// Load the config, falling back to defaults when the file is missing or
/// unreadable. A broken config must not block a task operation; the error
/// is carried alongside for callers that want to report it.
pub fn load_config_with_fallback() -> ConfigLoad {
    match config_path() {
        Ok(path) => load_config_with_fallback_from_path(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_with_fallback_from_path(path: &Path) -> ConfigLoad {
    if !path.exists() {
        return ConfigLoad {
            config: Config::default(),
            error: None,
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigLoad {
            config,
            error: None,
        },
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<Config, TaskError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| TaskError::io(format!("{}: {}", path.display(), err)))?;
    serde_json::from_str(&content).map_err(|err| {
        TaskError::corrupt_store(format!("invalid JSON in {}: {}", path.display(), err))
    })
}
