use crate::migration::domain::{AssetMetadata, BuildItem, DependencySpec, Scope, SectionKind};
use crate::migration::services::{AssetFlagResolver, DependencyEntryParser, ItemEmitter};
use crate::ports::outbound::BuildDocument;
use crate::shared::error::{json_kind, MigrationError};
use crate::shared::Result;
use serde_json::{Map, Value};

const DEPENDENCIES_KEY: &str = "dependencies";
const FRAMEWORKS_KEY: &str = "frameworks";
const TOOLS_KEY: &str = "tools";

/// Counts of items appended by one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Package references declared at the manifest root
    pub package_references: usize,
    /// Package references declared under `frameworks.<tfm>.dependencies`
    pub framework_package_references: usize,
    pub tool_references: usize,
}

impl WalkSummary {
    pub fn total(&self) -> usize {
        self.package_references + self.framework_package_references + self.tool_references
    }
}

/// One manifest map to translate
struct Section<'a> {
    kind: SectionKind,
    scope: Scope,
    entries: &'a Map<String, Value>,
}

/// DependencySectionWalker service driving the translation of a manifest
///
/// Visits `dependencies`, then every `frameworks.<tfm>.dependencies` map,
/// then `tools`, each in declaration order. The first failing entry aborts
/// the walk; items appended before it stay in the document.
pub struct DependencySectionWalker;

impl DependencySectionWalker {
    /// Translates every entry of `manifest` into `document`
    ///
    /// # Errors
    /// Returns the first `MalformedSection`, `MalformedEntry`,
    /// `MissingVersion` or `InvalidToolEntry` error encountered.
    pub fn walk<D>(manifest: &Map<String, Value>, document: &mut D) -> Result<WalkSummary>
    where
        D: BuildDocument + ?Sized,
    {
        Self::walk_with_progress(manifest, document, |_, _, _| {})
    }

    /// Same as [`walk`](Self::walk), calling `on_entry(processed, total, name)`
    /// after each appended item.
    pub fn walk_with_progress<D, F>(
        manifest: &Map<String, Value>,
        document: &mut D,
        mut on_entry: F,
    ) -> Result<WalkSummary>
    where
        D: BuildDocument + ?Sized,
        F: FnMut(usize, usize, &str),
    {
        let sections = Self::collect_sections(manifest)?;
        let total: usize = sections.iter().map(|s| s.entries.len()).sum();
        let mut summary = WalkSummary::default();
        let mut processed = 0;

        for section in &sections {
            for (name, raw) in section.entries {
                let spec = match section.kind {
                    SectionKind::Dependencies => {
                        DependencyEntryParser::parse(name, raw, &section.scope)?
                    }
                    SectionKind::Tools => DependencyEntryParser::parse_tool(name, raw)?,
                };

                let assets = match section.kind {
                    SectionKind::Dependencies => AssetFlagResolver::resolve(&spec),
                    SectionKind::Tools => AssetMetadata::none(),
                };

                let item = Self::emit(section.kind, &spec, &assets);
                tracing::debug!(
                    item_type = %item.item_type,
                    include = %item.include,
                    version = %spec.version_range,
                    scope = %spec.scope,
                    "migrated manifest entry"
                );
                document.append_item(item);

                match (section.kind, &section.scope) {
                    (SectionKind::Tools, _) => summary.tool_references += 1,
                    (SectionKind::Dependencies, Scope::Global) => summary.package_references += 1,
                    (SectionKind::Dependencies, Scope::Framework(_)) => {
                        summary.framework_package_references += 1
                    }
                }

                processed += 1;
                on_entry(processed, total, name.as_str());
            }
        }

        tracing::info!(
            package_references = summary.package_references,
            framework_package_references = summary.framework_package_references,
            tool_references = summary.tool_references,
            "dependency sections migrated"
        );

        Ok(summary)
    }

    fn emit(kind: SectionKind, spec: &DependencySpec, assets: &AssetMetadata) -> BuildItem {
        ItemEmitter::emit(kind, &spec.name, &spec.version_range, assets, &spec.scope)
    }

    /// Resolves the maps to visit, in visiting order. Section shapes are
    /// checked up front so the entry total is known before any append.
    fn collect_sections(manifest: &Map<String, Value>) -> Result<Vec<Section<'_>>> {
        let mut sections = Vec::new();

        if let Some(entries) = Self::object_section(manifest, DEPENDENCIES_KEY, DEPENDENCIES_KEY)? {
            sections.push(Section {
                kind: SectionKind::Dependencies,
                scope: Scope::Global,
                entries,
            });
        }

        if let Some(frameworks) = Self::object_section(manifest, FRAMEWORKS_KEY, FRAMEWORKS_KEY)? {
            for (tfm, framework) in frameworks {
                // The moniker is pasted into a quoted MSBuild condition.
                if tfm.is_empty() || tfm.contains('\'') {
                    return Err(MigrationError::InvalidFrameworkName { name: tfm.clone() }.into());
                }

                let label = format!("{}.{}", FRAMEWORKS_KEY, tfm);
                let framework = match framework {
                    Value::Object(map) => map,
                    Value::Null => continue,
                    other => {
                        return Err(MigrationError::MalformedSection {
                            section: label,
                            found: json_kind(other).to_string(),
                        }
                        .into())
                    }
                };

                let label = format!("{}.{}", label, DEPENDENCIES_KEY);
                if let Some(entries) = Self::object_section(framework, DEPENDENCIES_KEY, &label)? {
                    sections.push(Section {
                        kind: SectionKind::Dependencies,
                        scope: Scope::framework(tfm.as_str()),
                        entries,
                    });
                }
            }
        }

        if let Some(entries) = Self::object_section(manifest, TOOLS_KEY, TOOLS_KEY)? {
            sections.push(Section {
                kind: SectionKind::Tools,
                scope: Scope::Global,
                entries,
            });
        }

        Ok(sections)
    }

    /// Looks up `key` as an object. Absent or null yields `None`.
    fn object_section<'a>(
        parent: &'a Map<String, Value>,
        key: &str,
        label: &str,
    ) -> Result<Option<&'a Map<String, Value>>> {
        match parent.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(MigrationError::MalformedSection {
                section: label.to_string(),
                found: json_kind(other).to_string(),
            }
            .into()),
        }
    }
}
