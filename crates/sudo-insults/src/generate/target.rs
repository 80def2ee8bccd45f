//! Output language selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Python,
    Rust,
}

impl Target {
    /// File name of the data + accessor module.
    pub fn module_file(self) -> &'static str {
        match self {
            Target::Python => "SudoInsults.py",
            Target::Rust => "sudo_insults.rs",
        }
    }

    /// File name of the demo that prints one insult.
    pub fn demo_file(self) -> &'static str {
        match self {
            Target::Python => "demo.py",
            Target::Rust => "demo.rs",
        }
    }

    /// Module name the demo imports.
    pub fn module_name(self) -> &'static str {
        match self {
            Target::Python => "SudoInsults",
            Target::Rust => "sudo_insults",
        }
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Target::Python),
            "rust" | "rs" => Ok(Target::Rust),
            _ => Err(format!("Unknown target: {}. Use python or rust.", s)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Python => write!(f, "python"),
            Target::Rust => write!(f, "rust"),
        }
    }
}
