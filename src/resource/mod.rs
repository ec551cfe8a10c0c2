//! Resource lookup abstraction
//!
//! The fallback version lives in a properties resource shipped next to the
//! component. [ResourceLocator] abstracts where such resources are found:
//!
//! - [search_path::SearchPath]: ordered list of directories on disk
//! - [mock::InMemoryResources]: in-memory resources for testing
//!
//! Streams are returned as owned `Box<dyn Read>` values, so they are closed
//! when the caller drops them, on every exit path.

pub mod mock;
pub mod search_path;

pub use mock::InMemoryResources;
pub use search_path::SearchPath;

use crate::error::Result;
use std::io::Read;

/// Opens named resources from some search path.
pub trait ResourceLocator {
    /// Open a resource as a read-only stream
    ///
    /// # Arguments
    /// * `name` - Resource name (e.g., "version.properties")
    ///
    /// # Returns
    /// * `Ok(Some(stream))` - The first matching resource on the search path
    /// * `Ok(None)` - No location holds a resource with that name
    /// * `Err` - A matching resource exists but could not be opened
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read>>>;
}

impl<L: ResourceLocator + ?Sized> ResourceLocator for &L {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read>>> {
        (**self).open(name)
    }
}
