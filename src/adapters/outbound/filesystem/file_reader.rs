use crate::ports::outbound::ManifestReader;
use crate::shared::error::MigrationError;
use crate::shared::security;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Default legacy manifest file name
pub const DEFAULT_MANIFEST_NAME: &str = "project.json";

/// FileSystemReader adapter for reading the manifest from disk
///
/// This adapter implements the ManifestReader port. Reads go through the
/// symlink, file-type and size guards in `shared::security`.
pub struct FileSystemReader {
    manifest_name: String,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self::with_manifest_name(DEFAULT_MANIFEST_NAME)
    }

    /// Reader for a manifest with a non-default file name.
    pub fn with_manifest_name(manifest_name: impl Into<String>) -> Self {
        Self {
            manifest_name: manifest_name.into(),
        }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<String> {
        let manifest_path = self.manifest_path(project_path);

        if !manifest_path.exists() {
            return Err(MigrationError::ManifestNotFound {
                path: manifest_path.clone(),
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Run in the directory of a project.json-based project, or pass the correct path with --path.",
                    self.manifest_name,
                    project_path.display()
                ),
            }
            .into());
        }

        security::read_guarded(&manifest_path, &self.manifest_name).map_err(|e| {
            MigrationError::FileReadError {
                path: manifest_path,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn manifest_path(&self, project_path: &Path) -> PathBuf {
        project_path.join(&self.manifest_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("project.json"),
            r#"{"dependencies":{}}"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_manifest(temp_dir.path()).unwrap();

        assert_eq!(content, r#"{"dependencies":{}}"#);
    }

    #[test]
    fn test_read_manifest_custom_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("legacy.json"), "{}").unwrap();

        let reader = FileSystemReader::with_manifest_name("legacy.json");
        assert_eq!(reader.read_manifest(temp_dir.path()).unwrap(), "{}");
        assert_eq!(
            reader.manifest_path(temp_dir.path()),
            temp_dir.path().join("legacy.json")
        );
    }

    #[test]
    fn test_read_manifest_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_manifest(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MigrationError>(),
            Some(MigrationError::ManifestNotFound { .. })
        ));
        assert!(err.to_string().contains("project.json does not exist"));
    }

    #[test]
    fn test_read_manifest_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("project.json")).unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_manifest(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MigrationError>(),
            Some(MigrationError::FileReadError { .. })
        ));
        assert!(err.to_string().contains("not a regular file"));
    }
}
