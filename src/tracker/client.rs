use crate::config::TrackerConfig;
use crate::deferred::TrackingOptions;

/// Scope of a custom dimension set directly through
/// [`Tracker::set_dimension`](crate::tracker::Tracker::set_dimension).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DimensionScope {
    Visitor = 1,
    Session = 2,
    Page = 3,
}

/// Auxiliary page instrumentation registered once per page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instrumentation {
    /// Report script errors from files whose name matches the pattern.
    ErrorTracking { filename_must_match: String },
    /// Report print requests.
    PrintIntent,
    /// Report clicks on `mailto:` links.
    MailtoLinks,
    /// Report clicks on links leaving the site.
    ExternalLinks,
    /// Report clicks on links matching the selector as downloads.
    DownloadLinks { selector: String },
}

impl Instrumentation {
    /// The registrations made by every tracker, in registration order.
    pub fn standard(config: &TrackerConfig) -> Vec<Instrumentation> {
        vec![
            Instrumentation::ErrorTracking {
                filename_must_match: config.error_filename_pattern.clone(),
            },
            Instrumentation::PrintIntent,
            Instrumentation::MailtoLinks,
            Instrumentation::ExternalLinks,
            Instrumentation::DownloadLinks {
                selector: config.download_link_selector.clone(),
            },
        ]
    }
}

/// The analytics runtime that delivers calls over the network.
///
/// Options handed to the client have every default dimension already
/// stringified and contain no `null` values.
pub trait AnalyticsClient {
    /// Bootstrap the underlying analytics runtime.
    fn load()
    where
        Self: Sized;

    fn track_pageview(&mut self, path: Option<&str>, title: Option<&str>, options: &TrackingOptions);

    fn track_event(&mut self, category: &str, action: &str, options: &TrackingOptions);

    fn set_dimension(
        &mut self,
        index: u32,
        value: &str,
        name: Option<&str>,
        scope: Option<DimensionScope>,
    );

    fn track_share(&mut self, network: &str, options: &TrackingOptions);

    fn add_linked_tracker_domain(&mut self, tracker_id: &str, name: &str, domain: &str);

    fn register(&mut self, instrumentation: Instrumentation);
}
