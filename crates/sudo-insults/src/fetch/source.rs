//! The network seam used by the cache.

use crate::error::Result;

/// Something that can retrieve the raw bytes behind a URL.
pub trait Source: Send + Sync {
    /// Fetch the full body at `url`.
    ///
    /// A non-success response must be reported as an error, never as an
    /// empty body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
