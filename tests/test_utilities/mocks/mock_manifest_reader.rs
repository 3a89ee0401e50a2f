use pj_migrate::prelude::*;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving in-memory manifest text
pub struct MockManifestReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    /// Behaves like a project directory without a manifest
    pub fn missing() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, project_path: &Path) -> Result<String> {
        if self.should_fail {
            return Err(MigrationError::ManifestNotFound {
                path: self.manifest_path(project_path),
                suggestion: "project.json does not exist".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }

    fn manifest_path(&self, project_path: &Path) -> PathBuf {
        project_path.join("project.json")
    }
}
