//! Fetching insult source files and caching them on disk.
//!
//! Network access sits behind the [`Source`] trait so the cache can be
//! exercised offline:
//!
//! - **HttpSource** - blocking HTTP GET via `reqwest`
//! - **MockSource** - canned bodies for tests, counts requests
//!
//! [`Cache::acquire`] is the only entry point the orchestrator uses. It is
//! idempotent: once a file exists on disk it is never fetched again.

mod cache;
mod http;
mod mock;
mod source;

pub use cache::Cache;
pub use http::{CHUNK_SIZE, DEFAULT_BASE_URL, HttpSource};
pub use mock::MockSource;
pub use source::Source;
