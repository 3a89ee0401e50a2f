use crate::migration::domain::{AssetFlag, DependencySpec, DependencyType, Scope};
use crate::shared::error::{json_kind, MigrationError};
use crate::shared::Result;
use serde_json::{Map, Value};

const VERSION_FIELD: &str = "version";
const TYPE_FIELD: &str = "type";
const SUPPRESS_PARENT_FIELD: &str = "suppressParent";
const INCLUDE_FIELD: &str = "include";
const EXCLUDE_FIELD: &str = "exclude";

/// DependencyEntryParser service for normalizing manifest entries
///
/// Turns the string-or-object shape of a manifest entry into a
/// `DependencySpec`. Unknown object fields are ignored.
pub struct DependencyEntryParser;

impl DependencyEntryParser {
    /// Parses an entry of a `dependencies` map
    ///
    /// # Arguments
    /// * `name` - The entry key (dependency name)
    /// * `raw` - The entry value: a version string or an object
    /// * `scope` - Global, or the owning framework for framework sections
    ///
    /// # Errors
    /// * `MalformedEntry` - the value is neither a string nor an object, or a
    ///   recognized field has the wrong shape
    /// * `MissingVersion` - the object form has no `version`
    pub fn parse(name: &str, raw: &Value, scope: &Scope) -> Result<DependencySpec> {
        match raw {
            Value::String(version) => Ok(DependencySpec::from_version(
                name,
                version.clone(),
                scope.clone(),
            )),
            Value::Object(fields) => Self::parse_object(name, fields, scope),
            other => Err(MigrationError::MalformedEntry {
                section: Self::section_label(scope),
                name: name.to_string(),
                details: format!("expected a string or an object, found {}", json_kind(other)),
            }
            .into()),
        }
    }

    /// Parses an entry of the `tools` map. Only the string form is accepted.
    ///
    /// # Errors
    /// * `InvalidToolEntry` - the value is an object
    /// * `MalformedEntry` - the value is anything else but a string
    pub fn parse_tool(name: &str, raw: &Value) -> Result<DependencySpec> {
        match raw {
            Value::String(version) => Ok(DependencySpec::from_version(
                name,
                version.clone(),
                Scope::Global,
            )),
            Value::Object(_) => Err(MigrationError::InvalidToolEntry {
                name: name.to_string(),
            }
            .into()),
            other => Err(MigrationError::MalformedEntry {
                section: "tools".to_string(),
                name: name.to_string(),
                details: format!("expected a version string, found {}", json_kind(other)),
            }
            .into()),
        }
    }

    /// Manifest path of the `dependencies` map that owns entries in `scope`.
    pub fn section_label(scope: &Scope) -> String {
        match scope {
            Scope::Global => "dependencies".to_string(),
            Scope::Framework(tfm) => format!("frameworks.{}.dependencies", tfm),
        }
    }

    fn parse_object(
        name: &str,
        fields: &Map<String, Value>,
        scope: &Scope,
    ) -> Result<DependencySpec> {
        let malformed = |details: String| MigrationError::MalformedEntry {
            section: Self::section_label(scope),
            name: name.to_string(),
            details,
        };

        let version_range = match fields.get(VERSION_FIELD) {
            Some(Value::String(version)) => version.clone(),
            None | Some(Value::Null) => {
                return Err(MigrationError::MissingVersion {
                    section: Self::section_label(scope),
                    name: name.to_string(),
                }
                .into())
            }
            Some(other) => {
                return Err(malformed(format!(
                    "\"version\" must be a string, found {}",
                    json_kind(other)
                ))
                .into())
            }
        };

        let dependency_type = match fields.get(TYPE_FIELD) {
            None | Some(Value::Null) => DependencyType::Default,
            Some(Value::String(value)) => DependencyType::from_manifest(value),
            Some(other) => {
                return Err(malformed(format!(
                    "\"type\" must be a string, found {}",
                    json_kind(other)
                ))
                .into())
            }
        };

        let suppress_parent = Self::read_flags(fields, SUPPRESS_PARENT_FIELD)
            .map(Self::dedup)
            .map_err(malformed)?;
        let include = Self::read_flags(fields, INCLUDE_FIELD).map_err(malformed)?;
        let exclude = Self::read_flags(fields, EXCLUDE_FIELD)
            .map(Self::dedup)
            .map_err(malformed)?;

        for flag in suppress_parent.iter().chain(&include).chain(&exclude) {
            if !flag.is_known() {
                tracing::debug!(
                    dependency = name,
                    flag = %flag,
                    "unrecognized asset flag kept verbatim"
                );
            }
        }

        Ok(DependencySpec {
            name: name.to_string(),
            version_range,
            dependency_type,
            suppress_parent,
            include,
            exclude,
            scope: scope.clone(),
        })
    }

    /// Reads an asset-flag list field
    ///
    /// Accepts an array of strings or a single comma-separated string. An
    /// absent or null field yields an empty list. The error is a detail
    /// message for `MalformedEntry`.
    fn read_flags(
        fields: &Map<String, Value>,
        field: &str,
    ) -> std::result::Result<Vec<AssetFlag>, String> {
        match fields.get(field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(list)) => Ok(list
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(AssetFlag::from)
                .collect()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(token) => Ok(AssetFlag::new(token.clone())),
                    other => Err(format!(
                        "\"{}\" must contain only strings, found {}",
                        field,
                        json_kind(other)
                    )),
                })
                .collect(),
            Some(other) => Err(format!(
                "\"{}\" must be an array of strings, found {}",
                field,
                json_kind(other)
            )),
        }
    }

    /// Keeps the first occurrence of each token.
    fn dedup(flags: Vec<AssetFlag>) -> Vec<AssetFlag> {
        let mut unique: Vec<AssetFlag> = Vec::with_capacity(flags.len());
        for flag in flags {
            if !unique.contains(&flag) {
                unique.push(flag);
            }
        }
        unique
    }
}
