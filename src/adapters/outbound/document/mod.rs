/// In-memory build document adapter
mod project_document;

pub use project_document::ProjectDocument;
