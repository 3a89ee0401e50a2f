use crate::migration::domain::BuildItem;
use crate::ports::outbound::ProjectFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for rendering items as a JSON array
///
/// Each element mirrors `BuildItem`: `itemType`, `include`, ordered
/// `metadata` pairs and an optional `condition`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFormatter for JsonFormatter {
    fn format(&self, items: &[BuildItem]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(items)?;
        output.push('\n');
        Ok(output)
    }
}
