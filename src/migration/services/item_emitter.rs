use crate::migration::domain::{
    AssetMetadata, BuildItem, Scope, SectionKind, INCLUDE_ASSETS_METADATA,
    PRIVATE_ASSETS_METADATA, VERSION_METADATA,
};

/// ItemEmitter service for building one item per manifest entry
///
/// Pure construction: the returned item is not written anywhere.
pub struct ItemEmitter;

impl ItemEmitter {
    /// Builds the item for a dependency or tool entry
    ///
    /// # Arguments
    /// * `section` - Map the entry came from; selects the item type
    /// * `name` - Dependency name, used as `Include`
    /// * `version_range` - Written verbatim as `Version`
    /// * `assets` - Output of `AssetFlagResolver`
    /// * `scope` - Framework scope adds a `TargetFramework` condition
    pub fn emit(
        section: SectionKind,
        name: &str,
        version_range: &str,
        assets: &AssetMetadata,
        scope: &Scope,
    ) -> BuildItem {
        let mut item = BuildItem::new(section.item_type(), name)
            .with_metadata(VERSION_METADATA, version_range);

        if let Some(include_assets) = &assets.include_assets {
            item = item.with_metadata(INCLUDE_ASSETS_METADATA, include_assets.as_str());
        }
        if let Some(private_assets) = &assets.private_assets {
            item = item.with_metadata(PRIVATE_ASSETS_METADATA, private_assets.as_str());
        }

        if let Some(tfm) = scope.moniker() {
            item = item.with_condition(Self::framework_condition(tfm));
        }

        item
    }

    /// MSBuild condition restricting an item to one target framework.
    pub fn framework_condition(tfm: &str) -> String {
        format!(" '$(TargetFramework)' == '{}' ", tfm)
    }
}
