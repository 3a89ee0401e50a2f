pub mod asset_flag;
pub mod build_item;
pub mod dependency_spec;

pub use asset_flag::AssetFlag;
pub use build_item::{
    AssetMetadata, BuildItem, ItemType, MetadataEntry, SectionKind, INCLUDE_ASSETS_METADATA,
    PRIVATE_ASSETS_METADATA, VERSION_METADATA,
};
pub use dependency_spec::{DependencySpec, DependencyType, Scope};
