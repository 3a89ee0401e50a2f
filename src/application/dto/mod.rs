/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters,
/// keeping the migration core isolated.
mod migration_request;
mod migration_response;
mod output_format;

pub use migration_request::MigrationRequest;
pub use migration_response::MigrationResponse;
pub use output_format::OutputFormat;
