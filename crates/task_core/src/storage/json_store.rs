use crate::config;
use crate::error::TaskError;
use crate::model::Task;
use crate::storage::timestamp;
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "tasks.json";
const STORE_ENV_VAR: &str = "TASKTRACKER_STORE_PATH";

/// Resolve the backing file: environment variable first, then the config
/// file, then the platform default location.
pub fn store_path() -> Result<PathBuf, TaskError> {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = config::load_config_with_fallback().config.store_path
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| TaskError::io("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("tasktracker")
            .join(STORE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| TaskError::io("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("tasktracker")
            .join(STORE_FILE_NAME))
    }
}

/// Read the full collection. A missing file is an empty collection (first
/// run); anything unparseable is a corrupt store, surfaced to the caller
/// rather than swallowed into an empty list.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, TaskError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|err| TaskError::io(err.to_string()))?;
    let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|err| {
        TaskError::corrupt_store(format!("invalid JSON in {}: {}", path.display(), err))
    })?;
    validate_store(&tasks)?;

    Ok(tasks)
}

fn validate_store(tasks: &[Task]) -> Result<(), TaskError> {
    for (index, task) in tasks.iter().enumerate() {
        if task.id == 0 {
            return Err(TaskError::corrupt_store("task id must be positive"));
        }
        if tasks[..index].iter().any(|other| other.id == task.id) {
            return Err(TaskError::corrupt_store(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        if task.description.trim().is_empty() {
            return Err(TaskError::corrupt_store(format!(
                "task {} has an empty description",
                task.id
            )));
        }
        timestamp::parse(&task.created_at)?;
        timestamp::parse(&task.updated_at)?;
    }

    Ok(())
}

/// Replace the backing file with the full collection. The payload is written
/// to a sibling temp file and renamed into place, so an interrupted save
/// never leaves a truncated store behind.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), TaskError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| TaskError::io(err.to_string()))?;
    }

    let content =
        serde_json::to_string_pretty(tasks).map_err(|err| TaskError::io(err.to_string()))?;

    let tmp = temp_sibling(path);
    std::fs::write(&tmp, content).map_err(|err| TaskError::io(err.to_string()))?;
    if let Err(err) = std::fs::rename(&tmp, path) {
        std::fs::remove_file(&tmp).ok();
        return Err(TaskError::io(err.to_string()));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions)
            .map_err(|err| TaskError::io(err.to_string()))?;
    }

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| STORE_FILE_NAME.to_string());
    path.with_file_name(format!("{}.tmp.{}", file_name, std::process::id()))
}
