/// Result alias used across all layers.
///
/// Typed failures are carried as `MigrationError` inside the `anyhow::Error`
/// and can be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
