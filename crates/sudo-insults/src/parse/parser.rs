//! Line-oriented insult extraction.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{InsultsError, Result};

use super::state::BlockState;

/// Entries starting with this prefix are terminal settings, not insults.
pub const SENTINEL_PREFIX: &str = "stty:";

// A quoted string followed by a comma, nothing else on the line.
static INSULT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"(.*)",$"#).unwrap());

/// Pulls quoted insults out of an `ins_*.h` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsultParser {
    pc: bool,
}

impl InsultParser {
    /// Create a parser keeping PC variants when `pc` is true and non-PC
    /// variants otherwise.
    pub fn new(pc: bool) -> Self {
        Self { pc }
    }

    /// Parse header text, preserving line order.
    pub fn parse_str(&self, text: &str) -> Vec<String> {
        let mut state = BlockState::Normal;
        let mut insults = Vec::new();

        for raw in text.lines() {
            let line = raw.trim();

            if let Some(next) = state.transition(line) {
                state = next;
                continue;
            }

            let Some(caps) = INSULT_LINE.captures(line) else {
                continue;
            };
            let insult = &caps[1];

            if insult.starts_with(SENTINEL_PREFIX) || !state.admits(self.pc) {
                continue;
            }
            insults.push(insult.to_string());
        }

        insults
    }

    /// Read and parse a header file. Invalid UTF-8 is replaced, not rejected.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| InsultsError::io(path, e))?;
        Ok(self.parse_str(&String::from_utf8_lossy(&bytes)))
    }
}
