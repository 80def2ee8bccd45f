//! On-disk cache of downloaded insult files.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{InsultsError, Result};

use super::source::Source;

/// Cache-first access to remote insult files.
pub struct Cache {
    dir: PathBuf,
    base_url: String,
    source: Arc<dyn Source>,
}

impl Cache {
    /// Create a cache rooted at `dir`, fetching misses from `base_url`.
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>, source: Arc<dyn Source>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
            source,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Local path a file is cached at, whether or not it exists yet.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Full URL a file is fetched from.
    pub fn url_for(&self, filename: &str) -> String {
        format!("{}{}", self.base_url, filename)
    }

    /// Make sure `filename` is present locally and return its path.
    ///
    /// A file that already exists is returned without touching the network.
    /// Otherwise it is downloaded once and written verbatim.
    pub fn acquire(&self, filename: &str) -> Result<PathBuf> {
        let path = self.path_for(filename);
        if path.exists() {
            ensure_regular_file(&path)?;
            log::debug!("Using cached {}", path.display());
            return Ok(path);
        }

        let url = self.url_for(filename);
        log::info!("Downloading {}", url);
        let body = self.source.fetch(&url)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| InsultsError::io(&self.dir, e))?;
        }

        // Never clobber a file that appeared since the existence check.
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                ensure_regular_file(&path)?;
                log::debug!("{} appeared while downloading, keeping it", path.display());
                return Ok(path);
            }
            Err(e) => return Err(InsultsError::io(&path, e)),
        };
        file.write_all(&body).map_err(|e| InsultsError::io(&path, e))?;

        log::info!("Saved {} ({} bytes)", path.display(), body.len());
        Ok(path)
    }
}

fn ensure_regular_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(InsultsError::io(
            path,
            std::io::Error::other("cache entry exists but is not a regular file"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockSource;
    use tempfile::TempDir;

    const BASE: &str = "http://example.test/sudoers/";

    #[test]
    fn test_acquire_downloads_once() {
        let dir = TempDir::new().unwrap();
        let source = Arc::new(MockSource::new().with_file("ins_classic.h", "\"Wrong!\",\n"));
        let cache = Cache::new(dir.path(), BASE, source.clone());

        let first = cache.acquire("ins_classic.h").unwrap();
        let second = cache.acquire("ins_classic.h").unwrap();

        assert_eq!(first, second);
        assert_eq!(source.request_count(), 1);
        assert_eq!(source.requests(), vec![format!("{}ins_classic.h", BASE)]);
        assert_eq!(fs::read_to_string(&first).unwrap(), "\"Wrong!\",\n");
    }

    #[test]
    fn test_existing_file_skips_network() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ins_goons.h"), "local copy").unwrap();
        let source = Arc::new(MockSource::new());
        let cache = Cache::new(dir.path(), BASE, source.clone());

        let path = cache.acquire("ins_goons.h").unwrap();

        assert_eq!(source.request_count(), 0);
        assert_eq!(fs::read_to_string(path).unwrap(), "local copy");
    }

    #[test]
    fn test_http_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source = Arc::new(MockSource::new());
        let cache = Cache::new(dir.path(), BASE, source);

        let err = cache.acquire("ins_csops.h").unwrap_err();

        assert!(matches!(err, InsultsError::Http { status: 404, .. }));
        assert!(!dir.path().join("ins_csops.h").exists());
    }

    #[test]
    fn test_directory_in_place_of_file_is_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("ins_classic.h")).unwrap();
        let source = Arc::new(MockSource::new().with_file("ins_classic.h", "x"));
        let cache = Cache::new(dir.path(), BASE, source.clone());

        let err = cache.acquire("ins_classic.h").unwrap_err();

        match err {
            InsultsError::Io { path, source: io } => {
                assert_eq!(path, dir.path().join("ins_classic.h"));
                assert!(io.to_string().contains("not a regular file"));
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(source.request_count(), 0);
    }

    #[test]
    fn test_creates_missing_cache_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("cache").join("insults");
        let source = Arc::new(MockSource::new().with_file("ins_2001.h", "x"));
        let cache = Cache::new(&nested, BASE, source);

        let path = cache.acquire("ins_2001.h").unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.is_file());
    }
}
