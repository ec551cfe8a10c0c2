use crate::config::ResourceConfig;
use crate::error::Result;
use crate::resource::ResourceLocator;
use log::debug;
use std::env;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Ordered list of directories searched for resources.
///
/// The first directory containing a regular file with the requested name
/// wins; later directories are not consulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Create a search path over the given directories, in order
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        SearchPath {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Configured directories first, then the executable's directory when
    /// `include_executable_dir` is set.
    pub fn from_config(config: &ResourceConfig) -> Self {
        let mut dirs = config.search_paths.clone();
        if config.include_executable_dir {
            dirs.extend(executable_dir());
        }
        SearchPath { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Returns the path of the first match for `name`, if any.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}

fn executable_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

impl ResourceLocator for SearchPath {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read>>> {
        let Some(path) = self.find(name) else {
            debug!("Resource '{}' not found in {:?}", name, self.dirs());
            return Ok(None);
        };

        debug!("Opening resource {}", path.display());
        let file = File::open(&path)?;
        Ok(Some(Box::new(BufReader::new(file))))
    }
}
