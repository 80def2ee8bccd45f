//! Extracting insults from sudo's `ins_*.h` headers.

mod parser;
mod state;

pub use parser::{InsultParser, SENTINEL_PREFIX};
pub use state::{BlockState, ELSE_MARKER, ENDIF_MARKER, PC_MARKER};
