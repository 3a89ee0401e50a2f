/// Asset categories NuGet knows about. Anything else is still accepted.
const KNOWN_FLAGS: [&str; 6] = [
    "compile",
    "runtime",
    "native",
    "build",
    "contentFiles",
    "analyzers",
];

/// NewType wrapper for an asset-flag token (`compile`, `runtime`, ...)
///
/// Tokens are pass-through data: unrecognized values are preserved verbatim
/// and never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetFlag(String);

impl AssetFlag {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token belongs to the known asset vocabulary.
    pub fn is_known(&self) -> bool {
        KNOWN_FLAGS.contains(&self.0.as_str())
    }

    /// Joins tokens with `;`, the list separator used by MSBuild metadata.
    pub fn join(flags: &[AssetFlag]) -> String {
        flags
            .iter()
            .map(AssetFlag::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl std::fmt::Display for AssetFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetFlag {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_flags() {
        for token in KNOWN_FLAGS {
            assert!(AssetFlag::from(token).is_known(), "{token} should be known");
        }
    }

    #[test]
    fn test_unknown_flag_is_preserved() {
        let flag = AssetFlag::new("frameworkReferences");
        assert!(!flag.is_known());
        assert_eq!(flag.as_str(), "frameworkReferences");
    }

    #[test]
    fn test_known_flags_are_case_sensitive() {
        assert!(!AssetFlag::from("Compile").is_known());
    }

    #[test]
    fn test_join() {
        let flags = vec![AssetFlag::from("runtime"), AssetFlag::from("native")];
        assert_eq!(AssetFlag::join(&flags), "runtime;native");
        assert_eq!(AssetFlag::join(&[]), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", AssetFlag::from("analyzers")), "analyzers");
    }
}
