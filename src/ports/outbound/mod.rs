/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the build document, the file system and the console.
pub mod build_document;
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use build_document::BuildDocument;
pub use formatter::ProjectFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
