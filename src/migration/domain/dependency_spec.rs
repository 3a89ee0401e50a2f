use super::AssetFlag;

/// Dependency `type` declared in the manifest
///
/// `Build` is shorthand for "do not flow this dependency to consumers".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyType {
    #[default]
    Default,
    Build,
}

impl DependencyType {
    /// Maps the manifest's `type` string. Only `build` (any case) is special.
    pub fn from_manifest(value: &str) -> Self {
        if value.eq_ignore_ascii_case("build") {
            DependencyType::Build
        } else {
            DependencyType::Default
        }
    }
}

/// Where an entry was declared: the manifest root or a framework section
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Global,
    /// Target-framework moniker, taken verbatim from the `frameworks` key
    Framework(String),
}

impl Scope {
    pub fn framework(moniker: impl Into<String>) -> Self {
        Scope::Framework(moniker.into())
    }

    pub fn moniker(&self) -> Option<&str> {
        match self {
            Scope::Global => None,
            Scope::Framework(tfm) => Some(tfm),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Framework(tfm) => write!(f, "{}", tfm),
        }
    }
}

/// Normalized form of a single manifest entry
///
/// Built once at the parse boundary; downstream components never look at the
/// raw JSON again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    /// Opaque version string, copied verbatim
    pub version_range: String,
    pub dependency_type: DependencyType,
    /// Set semantics, declaration order kept
    pub suppress_parent: Vec<AssetFlag>,
    /// Ordered; empty means "all"
    pub include: Vec<AssetFlag>,
    /// Set semantics, declaration order kept
    pub exclude: Vec<AssetFlag>,
    pub scope: Scope,
}

impl DependencySpec {
    /// The minimal form produced by a bare version string.
    pub fn from_version(
        name: impl Into<String>,
        version_range: impl Into<String>,
        scope: Scope,
    ) -> Self {
        Self {
            name: name.into(),
            version_range: version_range.into(),
            dependency_type: DependencyType::Default,
            suppress_parent: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            scope,
        }
    }
}

#[cfg(test)]
impl DependencySpec {
    /// True when no asset-control field deviates from the defaults.
    pub(crate) fn is_minimal(&self) -> bool {
        self.dependency_type == DependencyType::Default
            && self.suppress_parent.is_empty()
            && self.include.is_empty()
            && self.exclude.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_type_from_manifest() {
        assert_eq!(DependencyType::from_manifest("build"), DependencyType::Build);
        assert_eq!(DependencyType::from_manifest("Build"), DependencyType::Build);
        assert_eq!(DependencyType::from_manifest("BUILD"), DependencyType::Build);
        assert_eq!(DependencyType::from_manifest("platform"), DependencyType::Default);
        assert_eq!(DependencyType::from_manifest("default"), DependencyType::Default);
        assert_eq!(DependencyType::from_manifest(""), DependencyType::Default);
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::Global.to_string(), "global");
        assert_eq!(Scope::framework("net451").to_string(), "net451");
    }

    #[test]
    fn test_scope_moniker() {
        assert_eq!(Scope::Global.moniker(), None);
        assert_eq!(Scope::framework("netcoreapp1.0").moniker(), Some("netcoreapp1.0"));
    }

    #[test]
    fn test_from_version_is_minimal() {
        let spec = DependencySpec::from_version("APackage", "1.0.0-preview", Scope::Global);
        assert_eq!(spec.name, "APackage");
        assert_eq!(spec.version_range, "1.0.0-preview");
        assert!(spec.is_minimal());
        assert_eq!(spec.scope, Scope::Global);
    }

    #[test]
    fn test_build_type_is_not_minimal() {
        let mut spec = DependencySpec::from_version("APackage", "1.0.0", Scope::Global);
        spec.dependency_type = DependencyType::Build;
        assert!(!spec.is_minimal());
    }
}
