use crate::migration::domain::BuildItem;
use crate::shared::Result;

/// ProjectFormatter port for rendering migrated items
///
/// Implementations decide the output syntax (MSBuild XML, JSON, ...).
pub trait ProjectFormatter {
    /// Renders the items in the order given
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, items: &[BuildItem]) -> Result<String>;
}
