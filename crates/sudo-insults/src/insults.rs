//! Main SudoInsults struct and public API.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::category::Category;
use crate::config::InsultsConfig;
use crate::error::Result;
use crate::fetch::{Cache, HttpSource, Source};
use crate::generate::{GeneratedFiles, Generator};
use crate::list::InsultList;
use crate::parse::InsultParser;
use crate::selection::Selection;

/// Result of a full generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Every insult written into the module.
    pub insults: InsultList,
    /// Number of insults contributed by each category, in selection order.
    pub per_category: IndexMap<Category, usize>,
    /// Files that were written.
    pub files: GeneratedFiles,
}

/// Fetches, filters and generates insult modules.
pub struct SudoInsults {
    config: InsultsConfig,
    source: Option<Arc<dyn Source>>,
}

impl SudoInsults {
    /// Create an instance that fetches over HTTP.
    pub fn new(config: InsultsConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// Use a different source for cache misses.
    pub fn with_source(self, source: impl Source + 'static) -> Self {
        self.with_shared_source(Arc::new(source))
    }

    /// Use a source that the caller keeps a handle to.
    pub fn with_shared_source(mut self, source: Arc<dyn Source>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn config(&self) -> &InsultsConfig {
        &self.config
    }

    fn cache(&self) -> Result<Cache> {
        let source = match &self.source {
            Some(source) => Arc::clone(source),
            None => Arc::new(HttpSource::new()?) as Arc<dyn Source>,
        };
        Ok(Cache::new(
            self.config.resolved_cache_dir(),
            self.config.base_url.clone(),
            source,
        ))
    }

    /// Fetch (if needed) and parse every selected category.
    pub fn collect(&self, selection: &Selection) -> Result<InsultList> {
        self.collect_by_category(selection)
            .map(|(insults, _)| insults)
    }

    fn collect_by_category(
        &self,
        selection: &Selection,
    ) -> Result<(InsultList, IndexMap<Category, usize>)> {
        let cache = self.cache()?;
        let parser = InsultParser::new(selection.pc());

        let mut insults = InsultList::new();
        let mut per_category = IndexMap::new();

        for category in selection.categories() {
            let path = cache.acquire(category.filename())?;
            let found = parser.parse_file(&path)?;
            log::debug!("{}: {} insults from {}", category, found.len(), path.display());
            per_category.insert(category, found.len());
            insults.extend(found);
        }

        Ok((insults, per_category))
    }

    /// Collect the insults and write the module and demo.
    ///
    /// Nothing is written unless every category was fetched and parsed.
    pub fn generate(&self, selection: &Selection) -> Result<GenerationReport> {
        let (insults, per_category) = self.collect_by_category(selection)?;

        if insults.is_empty() {
            log::warn!("No insults matched the selection, generating an empty module");
        }

        let generator = Generator::new(self.config.target);
        let files = generator.write(self.config.resolved_output_dir(), &insults)?;

        Ok(GenerationReport {
            insults,
            per_category,
            files,
        })
    }
}
