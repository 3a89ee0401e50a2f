use serde::Serialize;

/// Metadata names written on emitted items
pub const VERSION_METADATA: &str = "Version";
pub const INCLUDE_ASSETS_METADATA: &str = "IncludeAssets";
pub const PRIVATE_ASSETS_METADATA: &str = "PrivateAssets";

/// Manifest map an entry was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Dependencies,
    Tools,
}

impl SectionKind {
    pub fn item_type(self) -> ItemType {
        match self {
            SectionKind::Dependencies => ItemType::PackageReference,
            SectionKind::Tools => ItemType::DotNetCliToolReference,
        }
    }
}

/// Target build item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemType {
    PackageReference,
    DotNetCliToolReference,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::PackageReference => "PackageReference",
            ItemType::DotNetCliToolReference => "DotNetCliToolReference",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective asset-control values computed for one dependency
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMetadata {
    pub include_assets: Option<String>,
    pub private_assets: Option<String>,
}

impl AssetMetadata {
    pub fn none() -> Self {
        Self::default()
    }
}

/// A single `name = value` metadata pair on a build item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    pub name: String,
    pub value: String,
}

/// Build item emitted for one manifest entry
///
/// Metadata keep insertion order: `Version` first, then `IncludeAssets`,
/// then `PrivateAssets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildItem {
    pub item_type: ItemType,
    pub include: String,
    pub metadata: Vec<MetadataEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl BuildItem {
    pub fn new(item_type: ItemType, include: impl Into<String>) -> Self {
        Self {
            item_type,
            include: include.into(),
            metadata: Vec::new(),
            condition: None,
        }
    }

    pub fn with_metadata(mut self, name: &str, value: impl Into<String>) -> Self {
        self.metadata.push(MetadataEntry {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Looks up a metadata value by name.
    pub fn metadata_value(&self, name: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value.as_str())
    }

    pub fn version(&self) -> Option<&str> {
        self.metadata_value(VERSION_METADATA)
    }
}
