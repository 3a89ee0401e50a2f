//! pj-migrate - dependency migration tool for legacy project.json projects
//!
//! This library translates the `dependencies`, `frameworks.<tfm>.dependencies`
//! and `tools` sections of a project.json manifest into MSBuild
//! `PackageReference` and `DotNetCliToolReference` items, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`migration`): Entry parsing, asset resolution and item emission
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pj_migrate::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = MigrateDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = MigrationRequest::new(PathBuf::from("."), false);
//! let response = use_case.execute(request)?;
//!
//! let output = MsBuildFormatter::new().format(response.document.items())?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod migration;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::document::ProjectDocument;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MsBuildFormatter};
    pub use crate::application::dto::{MigrationRequest, MigrationResponse, OutputFormat};
    pub use crate::application::use_cases::MigrateDependenciesUseCase;
    pub use crate::migration::domain::{
        AssetFlag, AssetMetadata, BuildItem, DependencySpec, DependencyType, ItemType,
        MetadataEntry, Scope, SectionKind,
    };
    pub use crate::migration::services::{
        AssetFlagResolver, DependencyEntryParser, DependencySectionWalker, ItemEmitter,
        WalkSummary,
    };
    pub use crate::ports::outbound::{
        BuildDocument, ManifestReader, OutputPresenter, ProgressReporter, ProjectFormatter,
    };
    pub use crate::shared::error::{ExitCode, MigrationError};
    pub use crate::shared::Result;
}
