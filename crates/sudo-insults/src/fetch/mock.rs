//! Mock source for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{InsultsError, Result};

use super::source::Source;

/// Source that serves canned bodies keyed by file name.
///
/// Anything not registered answers like a 404. Every request is recorded,
/// including the failed ones.
#[derive(Default)]
pub struct MockSource {
    files: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl MockSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body for the given file name.
    pub fn with_file(mut self, filename: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.files.insert(filename.into(), body.into());
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl Source for MockSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        let filename = url.rsplit('/').next().unwrap_or(url);
        self.files
            .get(filename)
            .cloned()
            .ok_or_else(|| InsultsError::Http {
                url: url.to_string(),
                status: 404,
            })
    }
}
