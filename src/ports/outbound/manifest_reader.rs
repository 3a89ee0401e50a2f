use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ManifestReader port for loading the legacy dependency manifest
///
/// This port abstracts the file system operations needed to read
/// the project.json file from a project directory.
pub trait ManifestReader {
    /// Reads the raw manifest text from the specified project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, project_path: &Path) -> Result<String>;

    /// Location of the manifest inside `project_path`, used in messages
    fn manifest_path(&self, project_path: &Path) -> PathBuf;
}
