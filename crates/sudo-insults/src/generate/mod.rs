//! Code generation for the insult module and its demo.
//!
//! Two targets are supported:
//!
//! - **Python** - `SudoInsults.py` plus `demo.py`
//! - **Rust** - `sudo_insults.rs` plus `demo.rs`
//!
//! Both emit an accessor that indexes the list with the wall-clock time in
//! milliseconds modulo the list length, matching [`crate::InsultList::pick_at`].

mod python;
mod rust;
mod target;
mod writer;

pub use target::Target;
pub use writer::{GeneratedFiles, Generator};
