//! Run configuration.

use std::path::PathBuf;

use crate::error::Result;
use crate::fetch::DEFAULT_BASE_URL;
use crate::generate::Target;
use crate::paths;

/// Where files are cached and written, and where they are fetched from.
#[derive(Debug, Clone)]
pub struct InsultsConfig {
    /// Directory relative paths are resolved against.
    pub root: PathBuf,
    /// Cache directory for downloaded headers.
    pub cache_dir: PathBuf,
    /// Directory receiving the generated module and demo.
    pub output_dir: PathBuf,
    /// Prefix each header file name is appended to.
    pub base_url: String,
    /// Language of the generated files.
    pub target: Target,
}

impl InsultsConfig {
    /// Configuration with everything living directly in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            target: Target::default(),
        }
    }

    /// Configuration rooted at the running program's directory.
    pub fn for_program() -> Result<Self> {
        Ok(Self::new(paths::program_dir()?))
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Absolute cache directory.
    pub fn resolved_cache_dir(&self) -> PathBuf {
        paths::resolve(&self.cache_dir, &self.root)
    }

    /// Absolute output directory.
    pub fn resolved_output_dir(&self) -> PathBuf {
        paths::resolve(&self.output_dir, &self.root)
    }
}
