use crate::migration::domain::BuildItem;
use crate::ports::outbound::ProjectFormatter;
use crate::shared::Result;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;

const PROJECT: &str = "Project";
const ITEM_GROUP: &str = "ItemGroup";
const INDENT_SIZE: usize = 2;

/// MsBuildFormatter adapter for rendering items as an MSBuild project fragment
///
/// Consecutive items with the same item type and condition share one
/// `<ItemGroup>`; the condition is placed on the group.
pub struct MsBuildFormatter;

impl MsBuildFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes a value written between double quotes.
    ///
    /// Single quotes stay literal so conditions read the way MSBuild
    /// authors write them.
    fn attribute_value(value: &str) -> Cow<'_, str> {
        match partial_escape(value) {
            escaped if escaped.contains('"') => Cow::Owned(escaped.replace('"', "&quot;")),
            escaped => escaped,
        }
    }

    fn element_with_attribute<'a>(name: &'a str, key: &str, value: &str) -> BytesStart<'a> {
        let mut element = BytesStart::new(name);
        let value = Self::attribute_value(value);
        element.push_attribute((key.as_bytes(), value.as_bytes()));
        element
    }

    /// Splits items into runs sharing item type and condition
    fn group_items(items: &[BuildItem]) -> Vec<&[BuildItem]> {
        let mut groups = Vec::new();
        let mut start = 0;
        for i in 1..=items.len() {
            let boundary = i == items.len()
                || items[i].item_type != items[start].item_type
                || items[i].condition != items[start].condition;
            if boundary {
                groups.push(&items[start..i]);
                start = i;
            }
        }
        groups
    }
}

impl Default for MsBuildFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering elements
impl MsBuildFormatter {
    fn render_item_group(&self, writer: &mut Writer<Vec<u8>>, group: &[BuildItem]) -> Result<()> {
        let start = match group.first().and_then(|item| item.condition.as_deref()) {
            Some(condition) => Self::element_with_attribute(ITEM_GROUP, "Condition", condition),
            None => BytesStart::new(ITEM_GROUP),
        };
        writer.write_event(Event::Start(start))?;

        for item in group {
            self.render_item(writer, item)?;
        }

        writer.write_event(Event::End(BytesEnd::new(ITEM_GROUP)))?;
        Ok(())
    }

    fn render_item(&self, writer: &mut Writer<Vec<u8>>, item: &BuildItem) -> Result<()> {
        let element = item.item_type.as_str();
        let start = Self::element_with_attribute(element, "Include", &item.include);

        if item.metadata.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for entry in &item.metadata {
            let name = entry.name.as_str();
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(
                &entry.value,
            ))))?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(element)))?;
        Ok(())
    }
}

impl ProjectFormatter for MsBuildFormatter {
    fn format(&self, items: &[BuildItem]) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

        if items.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new(PROJECT)))?;
        } else {
            writer.write_event(Event::Start(BytesStart::new(PROJECT)))?;
            for group in Self::group_items(items) {
                self.render_item_group(&mut writer, group)?;
            }
            writer.write_event(Event::End(BytesEnd::new(PROJECT)))?;
        }

        let mut output = String::from_utf8(writer.into_inner())?;
        output.push('\n');
        Ok(output)
    }
}
