pub mod config;
pub mod error;
pub mod metadata;
pub mod properties;
pub mod resolver;
pub mod resource;
pub mod ui;

use config::Config;

pub use error::{LibVersionError, Result};
pub use resolver::{VersionResolver, UNKNOWN};

/// Resolves the version with the default resolver.
///
/// Checks the build's implementation version, then `version.properties` next
/// to the running executable, then falls back to [UNKNOWN].
pub fn resolve_version() -> String {
    VersionResolver::from_config(&Config::default()).resolve_version()
}

/// Prints `lib-version = <version>` to stdout using the default resolver.
pub fn print_version() {
    VersionResolver::from_config(&Config::default()).print_version();
}
