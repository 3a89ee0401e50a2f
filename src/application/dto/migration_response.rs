use crate::adapters::outbound::document::ProjectDocument;
use crate::migration::services::WalkSummary;

/// MigrationResponse - Internal response DTO from the migration use case
///
/// Holds the populated document so adapters can render it in any format.
#[derive(Debug, Clone)]
pub struct MigrationResponse {
    /// Document with one item per manifest entry, in manifest order
    pub document: ProjectDocument,
    /// Per-section item counts
    pub summary: WalkSummary,
    /// Echo of the request flag
    pub dry_run: bool,
}

impl MigrationResponse {
    pub fn new(document: ProjectDocument, summary: WalkSummary, dry_run: bool) -> Self {
        Self {
            document,
            summary,
            dry_run,
        }
    }
}
