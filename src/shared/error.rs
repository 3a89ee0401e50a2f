use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a broken manifest apart from
/// bad arguments or an environment problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every entry was migrated
    Success = 0,
    /// The manifest could not be parsed or contains an invalid entry
    ManifestRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, invalid project path, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Selects the exit code for a failed run.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<MigrationError>() {
            Some(e) if e.is_manifest_error() => ExitCode::ManifestRejected,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ManifestRejected => write!(f, "Manifest Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency migration.
///
/// The first five variants are raised by the translation core; a failure on
/// any entry aborts the whole manifest. The rest come from the surrounding
/// file handling.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Malformed entry '{name}' in '{section}': {details}\n\n💡 Hint: A dependency must be a version string or an object with a \"version\" field")]
    MalformedEntry {
        section: String,
        name: String,
        details: String,
    },

    #[error("Dependency '{name}' in '{section}' has no \"version\" field\n\n💡 Hint: Add a version, e.g. \"{name}\": {{ \"version\": \"1.0.0\" }}")]
    MissingVersion { section: String, name: String },

    #[error("Tool '{name}' uses the object form, which is not supported for tools\n\n💡 Hint: Declare tools as \"{name}\": \"<version>\"")]
    InvalidToolEntry { name: String },

    #[error("Section '{section}' must be a JSON object, found {found}")]
    MalformedSection { section: String, found: String },

    #[error("Framework name '{name}' cannot be used in an MSBuild condition\n\n💡 Hint: Target framework monikers must be non-empty and contain no single quotes")]
    InvalidFrameworkName { name: String },

    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains a JSON object")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl MigrationError {
    /// True for errors caused by the manifest content rather than the environment.
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            MigrationError::MalformedEntry { .. }
                | MigrationError::MissingVersion { .. }
                | MigrationError::InvalidToolEntry { .. }
                | MigrationError::MalformedSection { .. }
                | MigrationError::InvalidFrameworkName { .. }
                | MigrationError::ManifestParseError { .. }
        )
    }
}

/// Short description of a JSON value's shape, used in error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
