//! Addon locators: parsed references to fetchable addons.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An addon locator, similar to a URL, describing how to fetch an addon.
///
/// Grammar: `[name@]source[@version]`. The name is assumed to match the
/// addon's directory name inside its source artifact. The version can be a
/// keyword (`latest`), a branch name (`main`), or a dotted version with an
/// optional `v` prefix (`v0.6.1`).
///
/// Two locators denote the same dependency iff their names match; source and
/// version equality governs compatibility, not identity.
///
/// Sources containing a literal `@` (e.g. SSH-style remotes) are ambiguous
/// under this grammar; no escaping rule exists, so such strings parse into
/// the wrong fields or are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    /// Addon name; unset until resolved from the source's default export.
    pub name: Option<String>,
    /// Origin of the addon, e.g. a git URL or a local path.
    pub source: String,
    /// Version hint; `None` is treated as `latest`.
    pub version: Option<String>,
}

impl Locator {
    /// Build a fully-populated locator.
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            source: source.into(),
            version: Some(version.into()),
        }
    }

    /// Parse a locator string.
    ///
    /// One segment is a bare source, two are `name@source`, three are
    /// `name@source@version`. Anything else is malformed.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::MalformedLocator {
                input: input.to_string(),
                reason: "empty locator".to_string(),
            });
        }

        let parts: Vec<&str> = input.split('@').collect();
        let locator = match parts.as_slice() {
            [source] => Self {
                name: None,
                source: (*source).to_string(),
                version: None,
            },
            [name, source] => Self {
                name: Some((*name).to_string()),
                source: (*source).to_string(),
                version: None,
            },
            [name, source, version] => Self {
                name: Some((*name).to_string()),
                source: (*source).to_string(),
                version: Some((*version).to_string()),
            },
            _ => {
                return Err(Error::MalformedLocator {
                    input: input.to_string(),
                    reason: "more than three '@'-delimited segments".to_string(),
                });
            }
        };

        if locator.source.is_empty() {
            return Err(Error::MalformedLocator {
                input: input.to_string(),
                reason: "empty source".to_string(),
            });
        }

        if locator.name.as_deref() == Some("") {
            return Err(Error::MalformedLocator {
                input: input.to_string(),
                reason: "empty name".to_string(),
            });
        }

        Ok(locator)
    }

    /// The addon name, if resolved.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The version hint, defaulting to `latest` when unset.
    pub fn version_or_latest(&self) -> &str {
        self.version.as_deref().unwrap_or("latest")
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => write!(f, "{name}@{}@{version}", self.source),
            (Some(name), None) => write!(f, "{name}@{}", self.source),
            _ => write!(f, "{}", self.source),
        }
    }
}

impl FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_source_only() {
        let locator = Locator::parse("https://example.com/repo.git").unwrap();
        assert_eq!(locator.name, None);
        assert_eq!(locator.source, "https://example.com/repo.git");
        assert_eq!(locator.version, None);
    }

    #[test]
    fn parse_name_and_source() {
        let locator = Locator::parse("ui@https://example.com/repo.git").unwrap();
        assert_eq!(locator.name.as_deref(), Some("ui"));
        assert_eq!(locator.source, "https://example.com/repo.git");
        assert_eq!(locator.version, None);
    }

    #[test]
    fn parse_full() {
        let locator = Locator::parse("ui@https://example.com/repo.git@v1.2.0").unwrap();
        assert_eq!(locator.name.as_deref(), Some("ui"));
        assert_eq!(locator.source, "https://example.com/repo.git");
        assert_eq!(locator.version.as_deref(), Some("v1.2.0"));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(Locator::parse("").is_err());
        assert!(Locator::parse("   ").is_err());
    }

    #[test]
    fn parse_rejects_extra_segments() {
        let err = Locator::parse("ui@git@example.com:user/repo@1.0.0").unwrap_err();
        assert!(matches!(err, Error::MalformedLocator { .. }));
    }

    #[test]
    fn parse_rejects_empty_source() {
        assert!(Locator::parse("ui@@1.0.0").is_err());
    }

    #[test]
    fn parse_rejects_empty_name() {
        let err = Locator::parse("@repo-x").unwrap_err();
        assert!(matches!(err, Error::MalformedLocator { .. }));
        assert!(Locator::parse("@repo-x@1.0.0").is_err());
    }

    #[test]
    fn stringify_full() {
        let locator = Locator::new("ui", "repo-x", "1.0.0");
        assert_eq!(locator.to_string(), "ui@repo-x@1.0.0");
    }

    #[test]
    fn stringify_without_name_is_source() {
        let locator = Locator {
            name: None,
            source: "repo-x".to_string(),
            version: Some("1.0.0".to_string()),
        };
        assert_eq!(locator.to_string(), "repo-x");
    }

    #[test]
    fn round_trip_reproduces_all_fields() {
        let original = Locator::new("fox", "https://example.com/fox.git", "v2.3.1");
        let reparsed = Locator::parse(&original.to_string()).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn version_defaults_to_latest() {
        let locator = Locator::parse("ui@repo-x").unwrap();
        assert_eq!(locator.version_or_latest(), "latest");
    }
}
