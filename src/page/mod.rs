//! The document capability consumed by the dimension extractors.
//!
//! The tracker never walks a DOM itself. A [`Page`] answers four questions
//! about the current document; [`StaticPage`](staticpage::StaticPage) is an
//! in-memory snapshot for server-rendered pages and tests.

pub mod staticpage;

/// A `<meta>` element as the extractors see it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaTag {
    /// The `name` attribute, e.g. `govuk:content-id`.
    pub name: String,
    /// The `content` attribute.
    pub content: Option<String>,
    /// The raw `data-analytics-dimension` attribute.
    pub analytics_dimension: Option<String>,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Some(content.into()),
            analytics_dimension: None,
        }
    }

    /// Attach a `data-analytics-dimension` attribute.
    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.analytics_dimension = Some(dimension.into());
        self
    }
}

/// Read-only view of the current document and browser environment.
pub trait Page {
    /// HTTP status of the response that rendered the page, if known.
    fn http_status_code(&self) -> Option<u16>;

    /// `window.devicePixelRatio`, if the platform exposes one.
    fn device_pixel_ratio(&self) -> Option<f64>;

    /// All `<meta>` elements, in document order.
    fn meta_tags(&self) -> Vec<MetaTag>;

    /// Number of elements matching a CSS selector.
    fn count_matches(&self, selector: &str) -> usize;

    /// Meta tags whose name starts with `prefix`, in document order.
    fn meta_tags_with_prefix(&self, prefix: &str) -> Vec<MetaTag> {
        self.meta_tags()
            .into_iter()
            .filter(|tag| tag.name.starts_with(prefix))
            .collect()
    }
}

impl<P: Page + ?Sized> Page for &P {
    fn http_status_code(&self) -> Option<u16> {
        (**self).http_status_code()
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        (**self).device_pixel_ratio()
    }

    fn meta_tags(&self) -> Vec<MetaTag> {
        (**self).meta_tags()
    }

    fn count_matches(&self, selector: &str) -> usize {
        (**self).count_matches(selector)
    }
}
