//! The fixed set of insult categories and the files they come from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InsultsError;

/// One of the insult sources shipped with sudo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// HAL insults from 2001.
    #[serde(rename = "2001")]
    Hal2001,
    /// Insults from the original sudo.
    #[serde(rename = "CLASSIC")]
    Classic,
    /// Insults from the Goon Show.
    #[serde(rename = "GOONS")]
    Goons,
    /// CSOps insults.
    #[serde(rename = "CSOPS")]
    CsOps,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Hal2001,
        Category::Classic,
        Category::Goons,
        Category::CsOps,
    ];

    /// Command-line token naming this category.
    pub fn token(self) -> &'static str {
        match self {
            Category::Hal2001 => "2001",
            Category::Classic => "CLASSIC",
            Category::Goons => "GOONS",
            Category::CsOps => "CSOPS",
        }
    }

    /// Name of the header file holding this category's insults.
    pub fn filename(self) -> &'static str {
        match self {
            Category::Hal2001 => "ins_2001.h",
            Category::Classic => "ins_classic.h",
            Category::Goons => "ins_goons.h",
            Category::CsOps => "ins_csops.h",
        }
    }

    /// Short description for usage output.
    pub fn description(self) -> &'static str {
        match self {
            Category::Hal2001 => "HAL insults (paraphrased) from 2001",
            Category::Classic => "Insults from the original sudo",
            Category::Goons => "Insults from the Goon Show",
            Category::CsOps => "CSOps insults",
        }
    }
}

impl FromStr for Category {
    type Err = InsultsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Category::ALL
            .into_iter()
            .find(|c| c.token() == upper)
            .ok_or(InsultsError::UnknownCategory(upper))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
