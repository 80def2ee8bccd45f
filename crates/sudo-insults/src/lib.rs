//! sudo-insults: turn sudo's insult headers into a ready-to-use module.
//!
//! The headers (`ins_2001.h`, `ins_classic.h`, ...) are downloaded once and
//! cached next to the program. Their quoted insults are extracted, filtered by
//! the politically correct flag, and written into a generated module with an
//! accessor that picks one insult based on the current time.
//!
//! # Example
//!
//! ```no_run
//! use sudo_insults::{InsultsConfig, Selection, SudoInsults};
//!
//! let selection = Selection::parse("CLASSIC,2001,PC").unwrap();
//! let config = InsultsConfig::for_program().unwrap();
//! let report = SudoInsults::new(config).generate(&selection).unwrap();
//!
//! println!("Wrote {} insults to {}", report.insults.len(), report.files.module.display());
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod list;
pub mod parse;
pub mod paths;
pub mod selection;

mod insults;

pub use crate::insults::{GenerationReport, SudoInsults};
pub use category::Category;
pub use config::InsultsConfig;
pub use error::{InsultsError, Result};
pub use fetch::{Cache, HttpSource, MockSource, Source};
pub use generate::{GeneratedFiles, Generator, Target};
pub use list::InsultList;
pub use parse::InsultParser;
pub use selection::Selection;
