use crate::adapters::outbound::document::ProjectDocument;
use crate::application::dto::{MigrationRequest, MigrationResponse};
use crate::migration::services::DependencySectionWalker;
use crate::ports::outbound::{ManifestReader, ProgressReporter};
use crate::shared::error::{json_kind, MigrationError};
use crate::shared::Result;
use serde_json::Value;

/// MigrateDependenciesUseCase - Translates a project.json manifest into build items
///
/// This use case orchestrates the migration workflow using generic
/// dependency injection for the manifest source and progress output.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct MigrateDependenciesUseCase<MR, PR> {
    manifest_reader: MR,
    progress_reporter: PR,
}

impl<MR, PR> MigrateDependenciesUseCase<MR, PR>
where
    MR: ManifestReader,
    PR: ProgressReporter,
{
    /// Creates a new MigrateDependenciesUseCase with injected dependencies
    pub fn new(manifest_reader: MR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            progress_reporter,
        }
    }

    /// Executes the migration use case
    ///
    /// # Arguments
    /// * `request` - Migration request containing the project path
    ///
    /// # Returns
    /// MigrationResponse holding the populated document and per-section counts
    ///
    /// # Errors
    /// Fails on the first rejected entry; nothing is returned for a
    /// partially migrated manifest.
    pub fn execute(&self, request: MigrationRequest) -> Result<MigrationResponse> {
        let manifest_path = self.manifest_reader.manifest_path(&request.project_path);

        self.progress_reporter.report(&format!(
            "📖 Loading manifest from: {}",
            manifest_path.display()
        ));

        let content = self.manifest_reader.read_manifest(&request.project_path)?;
        let manifest = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(MigrationError::ManifestParseError {
                    path: manifest_path,
                    details: format!(
                        "top-level value must be an object, found {}",
                        json_kind(&other)
                    ),
                }
                .into())
            }
            Err(e) => {
                return Err(MigrationError::ManifestParseError {
                    path: manifest_path,
                    details: e.to_string(),
                }
                .into())
            }
        };
        tracing::debug!(path = %manifest_path.display(), keys = manifest.len(), "manifest parsed");

        self.progress_reporter
            .report("🔄 Migrating dependency sections...");

        let mut document = ProjectDocument::new();
        let summary = DependencySectionWalker::walk_with_progress(
            &manifest,
            &mut document,
            |current, total, name| {
                self.progress_reporter
                    .report_progress(current, total, Some(name));
            },
        )?;

        self.progress_reporter.report(&format!(
            "✅ Migrated {} item(s)",
            summary.total()
        ));
        self.progress_reporter.report(&format!(
            "   - Package references: {}",
            summary.package_references
        ));
        if summary.framework_package_references > 0 {
            self.progress_reporter.report(&format!(
                "   - Framework-specific package references: {}",
                summary.framework_package_references
            ));
        }
        self.progress_reporter.report(&format!(
            "   - Tool references: {}",
            summary.tool_references
        ));

        if summary.total() == 0 {
            self.progress_reporter
                .report_warning("⚠️  Manifest declares no dependencies or tools");
        }

        if request.dry_run {
            self.progress_reporter
                .report_completion("Dry run: manifest is valid, no output written");
        }

        Ok(MigrationResponse::new(document, summary, request.dry_run))
    }
}
