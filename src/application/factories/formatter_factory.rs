use crate::adapters::outbound::formatters::{JsonFormatter, MsBuildFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ProjectFormatter;

/// Factory for creating project formatters
///
/// Selection of the formatter adapter is an application concern, so the
/// factory lives here rather than in the CLI.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pj_migrate::application::dto::OutputFormat;
    /// use pj_migrate::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Xml);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ProjectFormatter> {
        match format {
            OutputFormat::Xml => Box::new(MsBuildFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pj_migrate::application::dto::OutputFormat;
    /// use pj_migrate::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering items as JSON...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Xml => "📝 Rendering items as an MSBuild project fragment...",
            OutputFormat::Json => "📝 Rendering items as JSON...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::domain::{BuildItem, ItemType};

    fn items() -> Vec<BuildItem> {
        vec![
            BuildItem::new(ItemType::PackageReference, "APackage")
                .with_metadata("Version", "1.0.0"),
        ]
    }

    #[test]
    fn test_create_xml_formatter() {
        let output = FormatterFactory::create(OutputFormat::Xml)
            .format(&items())
            .unwrap();
        assert!(output.starts_with("<Project>"));
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&items())
            .unwrap();
        assert!(output.starts_with('['));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Xml),
            "📝 Rendering items as an MSBuild project fragment..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Rendering items as JSON..."
        );
    }
}
