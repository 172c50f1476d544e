//! The page tracker.
//!
//! A [`Tracker`] is built once per page load. Building it consumes any
//! options deferred by the previous page, sends the initial pageview with
//! them and registers the standard [`Instrumentation`]. Every later call
//! recomputes the page's dimensions, overlays the caller's options and
//! hands the result to the [`AnalyticsClient`].
//!
//! ```rust,ignore
//! use pageanalytics::cookies::jar::MemoryCookieJar;
//! use pageanalytics::page::staticpage::StaticPage;
//! use pageanalytics::tracker::Tracker;
//!
//! let jar = MemoryCookieJar::from_cookie_header(request_cookie_header);
//! let mut tracker = Tracker::new(client, StaticPage::new(), jar.clone());
//! tracker.track_event("navigation", "click", None);
//! tracker.set_options_for_next_pageview(&serde_json::json!({"dimension5": "search"}));
//! ```

pub mod client;

pub use client::{AnalyticsClient, DimensionScope, Instrumentation};

use crate::config::TrackerConfig;
use crate::cookies::jar::CookieJar;
use crate::deferred::{DeferredOptionsChannel, TrackingOptions};
use crate::dimensions::aggregator::DimensionAggregator;
use crate::dimensions::{stringify, DimensionMapping};
use crate::page::Page;
use serde_json::Value;

/// Bootstrap the analytics runtime behind `C`.
pub fn load<C: AnalyticsClient>() {
    C::load();
}

pub struct Tracker<C, P, J> {
    client: C,
    page: P,
    deferred: DeferredOptionsChannel<J>,
    config: TrackerConfig,
    aggregator: DimensionAggregator,
}

impl<C, P, J> Tracker<C, P, J>
where
    C: AnalyticsClient,
    P: Page,
    J: CookieJar,
{
    /// Build a tracker with the default configuration and dimension sources.
    pub fn new(client: C, page: P, cookies: J) -> Self {
        Self::builder(client, page, cookies).build()
    }

    pub fn builder(client: C, page: P, cookies: J) -> TrackerBuilder<C, P, J> {
        TrackerBuilder {
            client,
            page,
            cookies,
            config: TrackerConfig::default(),
            aggregator: DimensionAggregator::default(),
        }
    }

    /// Send a pageview. `None` path and title mean the current page.
    pub fn track_pageview(
        &mut self,
        path: Option<&str>,
        title: Option<&str>,
        options: Option<&TrackingOptions>,
    ) {
        let options = self.default_options_with(options);
        tracing::trace!(path = ?path, count = options.len(), "pageview");
        self.client.track_pageview(path, title, &options);
    }

    pub fn track_event(&mut self, category: &str, action: &str, options: Option<&TrackingOptions>) {
        let options = self.default_options_with(options);
        tracing::trace!(category = %category, action = %action, "event");
        self.client.track_event(category, action, &options);
    }

    /// Set one dimension directly, without the page defaults.
    ///
    /// `None` (and JSON `null`) sets nothing. Any other value, including
    /// `0`, `false` and `""`, is stringified and sent.
    pub fn set_dimension(
        &mut self,
        index: u32,
        value: Option<&Value>,
        name: Option<&str>,
        scope: Option<DimensionScope>,
    ) {
        let Some(value) = value.and_then(stringify) else {
            return;
        };
        self.client.set_dimension(index, &value, name, scope);
    }

    pub fn track_share(&mut self, network: &str) {
        let options = self.default_options_with(None);
        self.client.track_share(network, &options);
    }

    pub fn add_linked_tracker_domain(&mut self, tracker_id: &str, name: &str, domain: &str) {
        self.client.add_linked_tracker_domain(tracker_id, name, domain);
    }

    /// Stash options for the next page's initial pageview. Non-objects are
    /// ignored.
    pub fn set_options_for_next_pageview(&self, options: &Value) {
        self.deferred.stash_for_next_pageview(options);
    }

    /// The page's dimensions as of now.
    pub fn custom_dimensions(&self) -> DimensionMapping {
        self.aggregator
            .aggregate(&self.page, self.deferred.store().jar(), &self.config)
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Mutable access for pages that change after load.
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn cookies(&self) -> &J {
        self.deferred.store().jar()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Page dimensions overlaid with `extra`; `null` values in `extra` are
    /// dropped.
    fn default_options_with(&self, extra: Option<&TrackingOptions>) -> TrackingOptions {
        let mut options = self.custom_dimensions().into_options();
        if let Some(extra) = extra {
            options.extend(
                extra
                    .iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
        }
        options
    }

    fn register_instrumentation(&mut self) {
        for instrumentation in Instrumentation::standard(&self.config) {
            tracing::debug!(instrumentation = ?instrumentation, "registering instrumentation");
            self.client.register(instrumentation);
        }
    }
}

pub struct TrackerBuilder<C, P, J> {
    client: C,
    page: P,
    cookies: J,
    config: TrackerConfig,
    aggregator: DimensionAggregator,
}

impl<C, P, J> TrackerBuilder<C, P, J>
where
    C: AnalyticsClient,
    P: Page,
    J: CookieJar,
{
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn aggregator(mut self, aggregator: DimensionAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Consume deferred options, send the initial pageview and register
    /// instrumentation.
    ///
    /// An invalid config is replaced by the defaults.
    pub fn build(self) -> Tracker<C, P, J> {
        let config = match self.config.validate() {
            Ok(()) => self.config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid tracker config, using defaults");
                TrackerConfig::default()
            }
        };

        let deferred =
            DeferredOptionsChannel::with_cookie_name(self.cookies, config.next_page_cookie.clone());
        let stashed = deferred.consume_stashed();

        let mut tracker = Tracker {
            client: self.client,
            page: self.page,
            deferred,
            config,
            aggregator: self.aggregator,
        };

        tracker.track_pageview(None, None, Some(&stashed));
        tracker.register_instrumentation();
        tracker
    }
}
