use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;

/// Lists the project directories directly under `dir`, sorted by name.
///
/// Hidden entries (leading `.`) and anything that is not a directory are
/// skipped, as are names that are not valid UTF-8 since they cannot be
/// passed back to the agent unchanged. A missing `dir` yields an empty
/// list. The directory is read on every call so projects created by a
/// finished agent show up at once.
pub fn list_projects(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "projects directory does not exist");
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(entry = ?entry.file_name(), "skipping non UTF-8 project name");
            continue;
        };

        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }
        projects.push(name);
    }

    projects.sort();
    debug!(dir = %dir.display(), count = projects.len(), "scanned projects");
    Ok(projects)
}
