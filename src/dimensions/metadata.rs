use crate::dimensions::{DimensionKey, DimensionMapping, DimensionSource, PageContext};
use std::collections::HashMap;

/// One row of the metadata table: tag name (after the prefix), target
/// dimension and the value reported when the page lacks the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTagMapping {
    pub tag: &'static str,
    pub key: DimensionKey,
    pub default: Option<&'static str>,
}

const fn mapping(tag: &'static str, key: DimensionKey, default: Option<&'static str>) -> MetaTagMapping {
    MetaTagMapping { tag, key, default }
}

/// Metadata tags reported as dimensions.
pub const META_TAG_MAPPINGS: &[MetaTagMapping] = &[
    mapping("section", DimensionKey::SECTION, None),
    mapping("format", DimensionKey::FORMAT, None),
    mapping("themes", DimensionKey::THEMES, Some("other")),
    mapping(
        "content-id",
        DimensionKey::CONTENT_ID,
        Some("00000000-0000-0000-0000-000000000000"),
    ),
    mapping("search-result-count", DimensionKey::SEARCH_RESULT_COUNT, None),
    mapping("publishing-government", DimensionKey::PUBLISHING_GOVERNMENT, None),
    mapping("political-status", DimensionKey::POLITICAL_STATUS, None),
    mapping("analytics:organisations", DimensionKey::ORGANISATIONS, None),
    mapping("analytics:world-locations", DimensionKey::WORLD_LOCATIONS, None),
    mapping("schema-name", DimensionKey::SCHEMA_NAME, None),
    mapping("rendering-application", DimensionKey::RENDERING_APPLICATION, None),
    mapping("navigation-page-type", DimensionKey::NAVIGATION_PAGE_TYPE, Some("none")),
    mapping("user-journey-stage", DimensionKey::USER_JOURNEY_STAGE, Some("thing")),
    mapping(
        "navigation-document-type",
        DimensionKey::NAVIGATION_DOCUMENT_TYPE,
        Some("other"),
    ),
    mapping("taxon-slug", DimensionKey::TAXON_SLUG, Some("other")),
    mapping("taxon-id", DimensionKey::TAXON_ID, Some("other")),
    mapping("taxon-slugs", DimensionKey::TAXON_SLUGS, Some("other")),
    mapping("taxon-ids", DimensionKey::TAXON_IDS, Some("other")),
    mapping("content-has-history", DimensionKey::CONTENT_HAS_HISTORY, Some("false")),
];

/// Page-level dimensions scraped from `<meta name="govuk:...">` tags,
/// per [`META_TAG_MAPPINGS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageMetadata;

impl DimensionSource for PageMetadata {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn extract(&self, ctx: &PageContext<'_>) -> DimensionMapping {
        let prefix = ctx.config.meta_prefix.as_str();

        // Last tag of a given name wins, like repeated attribute reads.
        let mut tags: HashMap<String, Option<String>> = HashMap::new();
        for tag in ctx.page.meta_tags_with_prefix(prefix) {
            if let Some(key) = tag.name.strip_prefix(prefix) {
                if META_TAG_MAPPINGS.iter().any(|m| m.tag == key) {
                    tags.insert(key.to_string(), tag.content);
                }
            }
        }

        let mut dims = DimensionMapping::new();
        for mapping in META_TAG_MAPPINGS {
            // An empty content attribute counts as missing.
            let value = tags
                .get(mapping.tag)
                .and_then(|content| content.as_deref())
                .filter(|content| !content.is_empty())
                .or(mapping.default);
            if let Some(value) = value {
                dims.insert(mapping.key, value);
            }
        }
        dims
    }
}
