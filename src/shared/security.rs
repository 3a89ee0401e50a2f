use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for manifest files accepted by the reader (100 MB)
pub const MAX_MANIFEST_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is itself a symbolic link.
///
/// Uses `symlink_metadata()` so the link is inspected rather than its target.
///
/// # Arguments
/// * `path` - The path to check
/// * `operation` - Operation name used in the error message ("read", "write")
pub fn ensure_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Checks that `path` is a regular file and returns its size in bytes.
///
/// # Errors
/// Returns an error if the path is missing, is a symbolic link, or is not a
/// regular file (directories, sockets, ...).
pub fn inspect_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Fails when `file_size` exceeds `max_size`.
pub fn ensure_within_size_limit(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a UTF-8 file after the regular-file and size checks pass.
pub fn read_guarded(path: &Path, file_description: &str) -> Result<String> {
    let size = inspect_regular_file(path, file_description)?;
    ensure_within_size_limit(size, path, MAX_MANIFEST_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("project.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(ensure_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_ensure_not_symlink_missing_path() {
        let path = PathBuf::from("/nonexistent/project.json");
        assert!(ensure_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = ensure_not_symlink(&link, "write").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_inspect_regular_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("project.json");
        fs::write(&file_path, "{\"a\":1}").unwrap();

        assert_eq!(inspect_regular_file(&file_path, "project.json").unwrap(), 7);
    }

    #[test]
    fn test_inspect_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = inspect_regular_file(temp_dir.path(), "project.json").unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_size_limit() {
        let path = PathBuf::from("/test/project.json");
        assert!(ensure_within_size_limit(1000, &path, MAX_MANIFEST_SIZE).is_ok());

        let err = ensure_within_size_limit(MAX_MANIFEST_SIZE + 1, &path, MAX_MANIFEST_SIZE)
            .unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_read_guarded_reads_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("project.json");
        fs::write(&file_path, "{\"dependencies\":{}}").unwrap();

        let content = read_guarded(&file_path, "project.json").unwrap();
        assert_eq!(content, "{\"dependencies\":{}}");
    }
}
