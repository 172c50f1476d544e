//! Section and section-link counts.
//!
//! Each count tries its strategies in order and keeps the first nonzero
//! result. The order is sidebar, then accordion, then grid, then the legacy
//! browse-page lists; reordering changes what is reported.

use crate::dimensions::{DimensionKey, DimensionMapping, DimensionSource, PageContext};
use crate::page::Page;

/// A named group of selectors whose match counts are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountStrategy {
    pub name: &'static str,
    pub selectors: &'static [&'static str],
}

impl CountStrategy {
    pub fn count(&self, page: &dyn Page) -> usize {
        self.selectors.iter().map(|s| page.count_matches(s)).sum()
    }
}

pub const SECTION_STRATEGIES: &[CountStrategy] = &[
    CountStrategy {
        name: "sidebar-related-items",
        selectors: &[r#"[data-track-count="sidebarRelatedItemSection"]"#],
    },
    CountStrategy {
        name: "sidebar-taxons",
        selectors: &[r#"[data-track-count="sidebarTaxonSection"]"#],
    },
    CountStrategy {
        name: "accordion-sections",
        selectors: &[r#"[data-track-count="accordionSection"]"#],
    },
    CountStrategy {
        name: "grid-links",
        selectors: &[r#"a[data-track-category="navGridLinkClicked"]"#],
    },
    CountStrategy {
        name: "browse-subsection-lists",
        selectors: &["#subsection ul:visible"],
    },
    CountStrategy {
        name: "browse-section-lists",
        selectors: &["#section ul"],
    },
];

// Grid links appear here as well as in SECTION_STRATEGIES.
pub const SECTION_LINK_STRATEGIES: &[CountStrategy] = &[
    CountStrategy {
        name: "related-links",
        selectors: &[r#"a[data-track-category="relatedLinkClicked"]"#],
    },
    CountStrategy {
        name: "accordion-links",
        selectors: &[r#"a[data-track-category="navAccordionLinkClicked"]"#],
    },
    CountStrategy {
        name: "grid-links",
        selectors: &[
            r#"a[data-track-category="navGridLinkClicked"]"#,
            r#"a[data-track-category="navGridLeafLinkClicked"]"#,
        ],
    },
    CountStrategy {
        name: "leaf-links",
        selectors: &[r#"a[data-track-category="navLeafLinkClicked"]"#],
    },
    CountStrategy {
        name: "browse-subsection-links",
        selectors: &["#subsection ul a:visible"],
    },
    CountStrategy {
        name: "browse-section-links",
        selectors: &["#section ul a"],
    },
];

/// First nonzero strategy count, or 0 when every strategy finds nothing.
pub fn first_nonzero(strategies: &[CountStrategy], page: &dyn Page) -> usize {
    strategies
        .iter()
        .map(|strategy| strategy.count(page))
        .find(|count| *count > 0)
        .unwrap_or(0)
}

/// Dimensions 26 and 27. Both are always present.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomCounts;

impl DimensionSource for DomCounts {
    fn name(&self) -> &'static str {
        "dom"
    }

    fn extract(&self, ctx: &PageContext<'_>) -> DimensionMapping {
        let mut dims = DimensionMapping::new();
        dims.insert(
            DimensionKey::SECTION_COUNT,
            first_nonzero(SECTION_STRATEGIES, ctx.page).to_string(),
        );
        dims.insert(
            DimensionKey::SECTION_LINK_COUNT,
            first_nonzero(SECTION_LINK_STRATEGIES, ctx.page).to_string(),
        );
        dims
    }
}
