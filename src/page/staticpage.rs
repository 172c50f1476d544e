use crate::page::{MetaTag, Page};
use std::collections::HashMap;

/// A document snapshot: meta tags plus precomputed selector counts.
///
/// Selectors are matched verbatim; a selector with no recorded count
/// matches nothing.
///
/// ```rust
/// use pageanalytics::page::staticpage::StaticPage;
/// use pageanalytics::page::Page;
///
/// let page = StaticPage::builder()
///     .meta("govuk:format", "guide")
///     .count(r#"[data-track-count="accordionSection"]"#, 3)
///     .build();
/// assert_eq!(page.count_matches(r#"[data-track-count="accordionSection"]"#), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticPage {
    http_status_code: Option<u16>,
    device_pixel_ratio: Option<f64>,
    meta_tags: Vec<MetaTag>,
    counts: HashMap<String, usize>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> StaticPageBuilder {
        StaticPageBuilder::default()
    }

    /// Replace any tag with the same name, else append.
    pub fn upsert_meta(&mut self, tag: MetaTag) {
        if let Some(existing) = self.meta_tags.iter_mut().find(|t| t.name == tag.name) {
            *existing = tag;
        } else {
            self.meta_tags.push(tag);
        }
    }

    pub fn remove_meta(&mut self, name: &str) {
        self.meta_tags.retain(|t| t.name != name);
    }
}

impl Page for StaticPage {
    fn http_status_code(&self) -> Option<u16> {
        self.http_status_code
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.device_pixel_ratio
    }

    fn meta_tags(&self) -> Vec<MetaTag> {
        self.meta_tags.clone()
    }

    fn count_matches(&self, selector: &str) -> usize {
        self.counts.get(selector).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticPageBuilder {
    page: StaticPage,
}

impl StaticPageBuilder {
    pub fn http_status_code(mut self, status: u16) -> Self {
        self.page.http_status_code = Some(status);
        self
    }

    pub fn device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.page.device_pixel_ratio = Some(ratio);
        self
    }

    /// Append `<meta name=.. content=..>`. Duplicate names are kept.
    pub fn meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.page.meta_tags.push(MetaTag::new(name, content));
        self
    }

    pub fn meta_tag(mut self, tag: MetaTag) -> Self {
        self.page.meta_tags.push(tag);
        self
    }

    /// Append an A/B assignment tag carrying `data-analytics-dimension`.
    pub fn ab_test(
        self,
        name: impl Into<String>,
        dimension: impl Into<String>,
        assignment: impl Into<String>,
    ) -> Self {
        self.meta_tag(MetaTag::new(name, assignment).with_dimension(dimension))
    }

    pub fn count(mut self, selector: impl Into<String>, count: usize) -> Self {
        self.page.counts.insert(selector.into(), count);
        self
    }

    pub fn build(self) -> StaticPage {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_selector_counts_zero() {
        let page = StaticPage::new();
        assert_eq!(page.count_matches("#section ul"), 0);
    }

    #[test]
    fn test_prefix_filter_keeps_document_order() {
        let page = StaticPage::builder()
            .meta("viewport", "width=device-width")
            .meta("govuk:format", "guide")
            .meta("govuk:section", "tax")
            .build();

        let names: Vec<_> = page
            .meta_tags_with_prefix("govuk:")
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["govuk:format", "govuk:section"]);
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut page = StaticPage::builder().meta("govuk:format", "guide").build();
        page.upsert_meta(MetaTag::new("govuk:format", "answer"));

        let tags = page.meta_tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].content.as_deref(), Some("answer"));

        page.remove_meta("govuk:format");
        assert!(page.meta_tags().is_empty());
    }

    #[test]
    fn test_ab_test_tag_carries_dimension() {
        let page = StaticPage::builder()
            .ab_test("govuk:ab-test:Example", "42", "Example:B")
            .build();
        let tag = &page.meta_tags()[0];
        assert_eq!(tag.analytics_dimension.as_deref(), Some("42"));
        assert_eq!(tag.content.as_deref(), Some("Example:B"));
    }
}
