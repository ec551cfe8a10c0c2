//! Packaging metadata sources
//!
//! The packaging step may stamp an implementation version into the build by
//! setting `LIB_VERSION_IMPLEMENTATION` when compiling. Builds made without
//! it (plain `cargo build` from a checkout) carry no such attribute.

/// Source of the build-time implementation version attribute
pub trait PackageMetadata {
    /// Returns the implementation version, if the build recorded one.
    ///
    /// May return a blank string; callers decide how to treat it.
    fn implementation_version(&self) -> Option<String>;
}

/// Metadata captured from the compile-time environment
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildMetadata;

impl PackageMetadata for BuildMetadata {
    fn implementation_version(&self) -> Option<String> {
        option_env!("LIB_VERSION_IMPLEMENTATION").map(str::to_string)
    }
}

/// Fixed metadata value, for callers that know their version out of band
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticMetadata(pub Option<String>);

impl StaticMetadata {
    pub fn new(version: impl Into<String>) -> Self {
        StaticMetadata(Some(version.into()))
    }

    pub fn absent() -> Self {
        StaticMetadata(None)
    }
}

impl PackageMetadata for StaticMetadata {
    fn implementation_version(&self) -> Option<String> {
        self.0.clone()
    }
}

impl<M: PackageMetadata + ?Sized> PackageMetadata for &M {
    fn implementation_version(&self) -> Option<String> {
        (**self).implementation_version()
    }
}
