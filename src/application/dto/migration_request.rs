use std::path::PathBuf;

/// MigrationRequest - Internal request DTO for the migration use case
#[derive(Debug, Clone)]
pub struct MigrationRequest {
    /// Path to the project directory containing the manifest
    pub project_path: PathBuf,
    /// Translate and validate only; the caller skips output
    pub dry_run: bool,
}

impl MigrationRequest {
    pub fn new(project_path: PathBuf, dry_run: bool) -> Self {
        Self {
            project_path,
            dry_run,
        }
    }
}
