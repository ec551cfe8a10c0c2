//! Version resolution with fallback
//!
//! Resolution order:
//! 1. Implementation version from packaging metadata, when non-blank
//! 2. `version` key of the bundled `version.properties` resource
//! 3. The [UNKNOWN] sentinel
//!
//! Nothing is cached; every call repeats the lookup.

use crate::config::{Config, ResourceConfig};
use crate::error::Result;
use crate::metadata::{BuildMetadata, PackageMetadata};
use crate::properties::Properties;
use crate::resource::{ResourceLocator, SearchPath};
use crate::ui;
use log::debug;
use std::io::{self, Write};

/// Returned when no version can be determined
pub const UNKNOWN: &str = "unknown";

/// Whitespace as classified by the JVM's `Character.isWhitespace`: Unicode
/// whitespace except the no-break spaces and NEL, plus the information
/// separators U+001C..=U+001F.
fn is_java_whitespace(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Blank means empty or only whitespace; such metadata counts as absent.
fn is_blank(version: &str) -> bool {
    version.chars().all(is_java_whitespace)
}

/// Resolves the version string of the current build.
#[derive(Debug, Clone)]
pub struct VersionResolver<M = BuildMetadata, L = SearchPath> {
    metadata: M,
    locator: L,
    resource_name: String,
    key: String,
}

impl VersionResolver {
    /// Resolver over build metadata and the configured resource search path
    pub fn from_config(config: &Config) -> Self {
        Self::new(BuildMetadata, SearchPath::from_config(&config.resource))
            .with_resource(&config.resource)
    }
}

impl<M: PackageMetadata, L: ResourceLocator> VersionResolver<M, L> {
    /// Create a resolver looking up `version` in `version.properties`
    pub fn new(metadata: M, locator: L) -> Self {
        let defaults = ResourceConfig::default();
        VersionResolver {
            metadata,
            locator,
            resource_name: defaults.file_name,
            key: defaults.key,
        }
    }

    /// Use the resource name and key from `resource`
    pub fn with_resource(mut self, resource: &ResourceConfig) -> Self {
        self.resource_name = resource.file_name.clone();
        self.key = resource.key.clone();
        self
    }

    /// Returns a best-effort version string.
    ///
    /// Never fails: every lookup failure collapses into [UNKNOWN].
    pub fn resolve_version(&self) -> String {
        if let Some(version) = self.metadata.implementation_version() {
            if !is_blank(&version) {
                debug!("Using implementation version from package metadata");
                return version;
            }
            debug!("Package metadata carries a blank implementation version");
        }

        match self.load_from_resource() {
            Ok(version) => version,
            Err(e) => {
                debug!("Cannot read version from '{}': {}", self.resource_name, e);
                UNKNOWN.to_string()
            }
        }
    }

    /// Version from the properties resource; [UNKNOWN] if the resource or
    /// the key is missing.
    fn load_from_resource(&self) -> Result<String> {
        let Some(mut stream) = self.locator.open(&self.resource_name)? else {
            debug!("Resource '{}' is not on the search path", self.resource_name);
            return Ok(UNKNOWN.to_string());
        };

        let properties = Properties::load(&mut stream)?;
        Ok(properties.get_or(&self.key, UNKNOWN).to_string())
    }

    /// Writes the `lib-version = <version>` line to `out`
    pub fn write_version<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", ui::format_version_line(&self.resolve_version()))
    }

    /// Prints the `lib-version = <version>` line to stdout.
    ///
    /// Write failures are ignored.
    pub fn print_version(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_version(&mut handle) {
            debug!("Failed to write version line: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::StaticMetadata;
    use crate::resource::InMemoryResources;

    fn resources_with(content: &str) -> InMemoryResources {
        let mut resources = InMemoryResources::new();
        resources.add("version.properties", content);
        resources
    }

    #[test]
    fn test_metadata_wins_over_resource() {
        let resolver = VersionResolver::new(
            StaticMetadata::new("9.9.9"),
            resources_with("version=2.3.1"),
        );
        assert_eq!(resolver.resolve_version(), "9.9.9");
    }

    #[test]
    fn test_metadata_wins_over_broken_resource() {
        let mut resources = InMemoryResources::new();
        resources.fail_read("version.properties", io::ErrorKind::Other);
        let resolver = VersionResolver::new(StaticMetadata::new("1.0.0"), resources);
        assert_eq!(resolver.resolve_version(), "1.0.0");
    }

    #[test]
    fn test_metadata_value_is_not_trimmed() {
        let resolver = VersionResolver::new(StaticMetadata::new(" 1.0 "), InMemoryResources::new());
        assert_eq!(resolver.resolve_version(), " 1.0 ");
    }

    #[test]
    fn test_blank_metadata_falls_back() {
        for blank in ["", "   ", "\t\n"] {
            let resolver =
                VersionResolver::new(StaticMetadata::new(blank), resources_with("version=2.3.1"));
            assert_eq!(resolver.resolve_version(), "2.3.1");
        }
    }

    #[test]
    fn test_blank_uses_jvm_whitespace_classes() {
        // No-break spaces are content, information separators are blank
        for kept in ["\u{A0}", "\u{2007}", "\u{202F}", "\u{85}"] {
            let resolver =
                VersionResolver::new(StaticMetadata::new(kept), resources_with("version=2.3.1"));
            assert_eq!(resolver.resolve_version(), kept);
        }
        for blank in ["\u{1C}", "\u{1D}\u{1E}\u{1F}", " \u{1C}\t"] {
            let resolver =
                VersionResolver::new(StaticMetadata::new(blank), resources_with("version=2.3.1"));
            assert_eq!(resolver.resolve_version(), "2.3.1");
        }
    }

    #[test]
    fn test_is_java_whitespace() {
        assert!(is_java_whitespace(' '));
        assert!(is_java_whitespace('\u{2003}'));
        assert!(is_java_whitespace('\u{1C}'));
        assert!(!is_java_whitespace('\u{A0}'));
        assert!(!is_java_whitespace('a'));
    }

    #[test]
    fn test_absent_metadata_and_resource() {
        let resolver = VersionResolver::new(StaticMetadata::absent(), InMemoryResources::new());
        assert_eq!(resolver.resolve_version(), UNKNOWN);
    }

    #[test]
    fn test_resource_without_version_key() {
        let resolver =
            VersionResolver::new(StaticMetadata::absent(), resources_with("name=demo\n"));
        assert_eq!(resolver.resolve_version(), UNKNOWN);
    }

    #[test]
    fn test_empty_version_value_is_returned() {
        let resolver = VersionResolver::new(StaticMetadata::absent(), resources_with("version="));
        assert_eq!(resolver.resolve_version(), "");
    }

    #[test]
    fn test_corrupt_resource() {
        let resolver =
            VersionResolver::new(StaticMetadata::absent(), resources_with("version=\\uZZZZ"));
        assert_eq!(resolver.resolve_version(), UNKNOWN);

        let resolver =
            VersionResolver::new(StaticMetadata::absent(), resources_with("version=\\uD800"));
        assert_eq!(resolver.resolve_version(), UNKNOWN);
    }

    #[test]
    fn test_non_utf8_resource_is_read_as_latin1() {
        let mut resources = InMemoryResources::new();
        resources.add(
            "version.properties",
            b"# (c) \xa9 ACME\nversion=2.3.1\n".to_vec(),
        );
        let resolver = VersionResolver::new(StaticMetadata::absent(), resources);
        assert_eq!(resolver.resolve_version(), "2.3.1");
    }

    #[test]
    fn test_unreadable_resource() {
        let mut resources = InMemoryResources::new();
        resources.fail_open("version.properties", io::ErrorKind::PermissionDenied);
        let resolver = VersionResolver::new(StaticMetadata::absent(), &resources);
        assert_eq!(resolver.resolve_version(), UNKNOWN);

        resources.fail_read("version.properties", io::ErrorKind::InvalidData);
        let resolver = VersionResolver::new(StaticMetadata::absent(), &resources);
        assert_eq!(resolver.resolve_version(), UNKNOWN);
    }

    #[test]
    fn test_custom_resource_name_and_key() {
        let mut resources = InMemoryResources::new();
        resources.add("build.properties", "release=7.1");
        let resource = ResourceConfig {
            file_name: "build.properties".to_string(),
            key: "release".to_string(),
            ..ResourceConfig::default()
        };
        let resolver =
            VersionResolver::new(StaticMetadata::absent(), resources).with_resource(&resource);
        assert_eq!(resolver.resolve_version(), "7.1");
    }

    #[test]
    fn test_write_version_line() {
        let resolver = VersionResolver::new(StaticMetadata::absent(), resources_with("version=2.3.1"));
        let mut out = Vec::new();
        resolver.write_version(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "lib-version = 2.3.1\n");
    }

    #[test]
    fn test_write_version_unknown() {
        let resolver = VersionResolver::new(StaticMetadata::absent(), InMemoryResources::new());
        let mut out = Vec::new();
        resolver.write_version(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "lib-version = unknown\n");
    }
}

