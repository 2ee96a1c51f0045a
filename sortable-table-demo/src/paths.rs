//! Platform-specific paths.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "sortable-table";
const APPLICATION: &str = "sortable-table-demo";
const LOG_FILE: &str = "sortable-table-demo.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/sortable-table-demo` or `~/.cache/sortable-table-demo`
/// - macOS: `~/Library/Caches/dev.sortable-table.sortable-table-demo`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file. Falls back to the working directory when no
/// home directory can be determined.
pub fn log_file() -> PathBuf {
    cache_dir()
        .map(|dir| dir.join(LOG_FILE))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE))
}
