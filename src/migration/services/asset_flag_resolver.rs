use crate::migration::domain::{AssetFlag, AssetMetadata, DependencySpec, DependencyType};

/// PrivateAssets value written for `type: build` dependencies
pub const PRIVATE_ASSETS_ALL: &str = "All";

/// AssetFlagResolver service for computing asset-flow metadata
///
/// Only explicit manifest overrides produce metadata; the build system's own
/// defaults are never materialized here.
pub struct AssetFlagResolver;

impl AssetFlagResolver {
    /// Computes `IncludeAssets` and `PrivateAssets` for a dependency
    ///
    /// # Rules
    /// 1. `IncludeAssets` = `include` minus `exclude`, in `include` order.
    ///    Absent when `include` is empty, whatever `exclude` holds.
    /// 2. `PrivateAssets` = `All` for `type: build`, ignoring `suppressParent`.
    ///    Otherwise the `suppressParent` tokens in declaration order, or
    ///    absent when there are none.
    pub fn resolve(spec: &DependencySpec) -> AssetMetadata {
        AssetMetadata {
            include_assets: Self::include_assets(spec),
            private_assets: Self::private_assets(spec),
        }
    }

    fn include_assets(spec: &DependencySpec) -> Option<String> {
        if spec.include.is_empty() {
            // Exclude-only entries produce no asset metadata.
            return None;
        }

        let effective: Vec<AssetFlag> = spec
            .include
            .iter()
            .filter(|flag| !spec.exclude.contains(flag))
            .cloned()
            .collect();

        Some(AssetFlag::join(&effective))
    }

    fn private_assets(spec: &DependencySpec) -> Option<String> {
        if spec.dependency_type == DependencyType::Build {
            return Some(PRIVATE_ASSETS_ALL.to_string());
        }

        if spec.suppress_parent.is_empty() {
            None
        } else {
            Some(AssetFlag::join(&spec.suppress_parent))
        }
    }
}
