use crate::error::Result;
use crate::resource::ResourceLocator;
use std::collections::HashMap;
use std::io::{self, Cursor, Read};

#[derive(Debug, Clone)]
enum Entry {
    Content(Vec<u8>),
    OpenError(io::ErrorKind),
    ReadError(io::ErrorKind),
}

/// In-memory resource locator for testing without touching the filesystem
#[derive(Debug, Clone, Default)]
pub struct InMemoryResources {
    entries: HashMap<String, Entry>,
}

impl InMemoryResources {
    /// Create a locator with no resources
    pub fn new() -> Self {
        InMemoryResources::default()
    }

    /// Add a resource with the given contents
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.entries
            .insert(name.into(), Entry::Content(content.into()));
    }

    /// Make opening `name` fail with the given error kind
    pub fn fail_open(&mut self, name: impl Into<String>, kind: io::ErrorKind) {
        self.entries.insert(name.into(), Entry::OpenError(kind));
    }

    /// Make `name` open successfully but fail on the first read
    pub fn fail_read(&mut self, name: impl Into<String>, kind: io::ErrorKind) {
        self.entries.insert(name.into(), Entry::ReadError(kind));
    }
}

struct FailingReader(io::ErrorKind);

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "simulated read failure"))
    }
}

impl ResourceLocator for InMemoryResources {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read>>> {
        match self.entries.get(name) {
            None => Ok(None),
            Some(Entry::Content(bytes)) => Ok(Some(Box::new(Cursor::new(bytes.clone())))),
            Some(Entry::OpenError(kind)) => {
                Err(io::Error::new(*kind, "simulated open failure").into())
            }
            Some(Entry::ReadError(kind)) => Ok(Some(Box::new(FailingReader(*kind)))),
        }
    }
}
