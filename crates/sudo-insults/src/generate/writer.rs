//! Writing the generated artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{InsultsError, Result};
use crate::list::InsultList;

use super::target::Target;
use super::{python, rust};

/// Paths of the files written by a [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFiles {
    pub module: PathBuf,
    pub demo: PathBuf,
}

/// Renders the insult module and demo for one target language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    target: Target,
}

impl Generator {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Source of the data + accessor module.
    pub fn render_module(&self, insults: &InsultList) -> Result<String> {
        match self.target {
            Target::Python => python::render_module(insults),
            Target::Rust => Ok(rust::render_module(insults)),
        }
    }

    /// Source of the demo program.
    pub fn render_demo(&self) -> String {
        match self.target {
            Target::Python => python::render_demo(self.target.module_name()),
            Target::Rust => rust::render_demo(self.target.module_name()),
        }
    }

    /// Write both files into `dir`, replacing whatever is there.
    pub fn write(&self, dir: impl AsRef<Path>, insults: &InsultList) -> Result<GeneratedFiles> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| InsultsError::io(dir, e))?;
        }

        let module = dir.join(self.target.module_file());
        let demo = dir.join(self.target.demo_file());

        let module_source = self.render_module(insults)?;
        fs::write(&module, module_source).map_err(|e| InsultsError::io(&module, e))?;
        log::info!("Wrote {} ({} insults)", module.display(), insults.len());

        fs::write(&demo, self.render_demo()).map_err(|e| InsultsError::io(&demo, e))?;
        log::info!("Wrote {}", demo.display());

        Ok(GeneratedFiles { module, demo })
    }
}
