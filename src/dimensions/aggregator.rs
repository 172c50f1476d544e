use crate::config::TrackerConfig;
use crate::cookies::jar::CookieJar;
use crate::dimensions::abtest::AbTestAssignments;
use crate::dimensions::browser::BrowserSignals;
use crate::dimensions::dom::DomCounts;
use crate::dimensions::metadata::PageMetadata;
use crate::dimensions::{DimensionMapping, DimensionSource, PageContext};
use crate::page::Page;
use std::fmt;

/// Runs dimension sources in order and merges their output; a later source
/// wins on key collision.
pub struct DimensionAggregator {
    sources: Vec<Box<dyn DimensionSource>>,
}

impl Default for DimensionAggregator {
    /// Browser signals, page metadata, DOM counts, A/B assignments.
    fn default() -> Self {
        Self::empty()
            .with_source(BrowserSignals)
            .with_source(PageMetadata)
            .with_source(DomCounts)
            .with_source(AbTestAssignments)
    }
}

impl fmt::Debug for DimensionAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DimensionAggregator")
            .field("sources", &self.source_names())
            .finish()
    }
}

impl DimensionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An aggregator with no sources.
    pub fn empty() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a source, after (and so overriding) every existing one.
    pub fn with_source(mut self, source: impl DimensionSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn aggregate(
        &self,
        page: &dyn Page,
        cookies: &dyn CookieJar,
        config: &TrackerConfig,
    ) -> DimensionMapping {
        let ctx = PageContext {
            page,
            cookies,
            config,
        };

        self.sources
            .iter()
            .fold(DimensionMapping::new(), |mut merged, source| {
                merged.merge(source.extract(&ctx));
                merged
            })
    }
}
