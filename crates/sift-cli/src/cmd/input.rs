//! Shared input loading for command handlers.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use sift_core::config::ScoringConfig;
use sift_core::model::Task;
use tracing::debug;

/// Read a task list from a JSON file, or stdin when the path is `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// task objects.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read tasks from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("read task file {}", path.display()))?
    };

    let tasks: Vec<Task> = serde_json::from_str(&text)
        .with_context(|| format!("parse task file {}", path.display()))?;
    debug!(count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Load the optional scoring config file.
///
/// # Errors
///
/// Returns an error if a path was given but the file cannot be loaded.
pub fn load_config(path: Option<&Path>) -> Result<Option<ScoringConfig>> {
    path.map(ScoringConfig::load).transpose()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_a_task_array() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id": 1, "title": "A"}}, {{"title": "anonymous"}}]"#
        )
        .expect("write fixture");

        let tasks = load_tasks(file.path()).expect("load");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "A");
    }

    #[test]
    fn rejects_non_array_input() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"id": 1}}"#).expect("write fixture");

        assert!(load_tasks(file.path()).is_err());
    }

    #[test]
    fn missing_config_path_is_none() {
        assert_eq!(load_config(None).expect("no path"), None);
    }
}
