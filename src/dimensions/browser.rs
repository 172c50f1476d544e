use crate::cookies::store::CookieStore;
use crate::dimensions::{format_number, DimensionKey, DimensionMapping, DimensionSource, PageContext};

/// Response and environment signals: HTTP status, TLS version, pixel ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSignals;

impl DimensionSource for BrowserSignals {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn extract(&self, ctx: &PageContext<'_>) -> DimensionMapping {
        let mut dims = DimensionMapping::new();

        let status = ctx
            .page
            .http_status_code()
            .filter(|status| *status != 0)
            .unwrap_or(ctx.config.default_http_status);
        dims.insert(DimensionKey::HTTP_STATUS, status.to_string());

        // Set unencoded by the edge, so read it raw.
        let tls_version = CookieStore::new(ctx.cookies)
            .get_raw(&ctx.config.tls_version_cookie)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ctx.config.default_tls_version.clone());
        dims.insert(DimensionKey::TLS_VERSION, tls_version);

        // Zero, NaN and infinities mean the platform has no usable ratio.
        if let Some(ratio) = ctx
            .page
            .device_pixel_ratio()
            .filter(|r| *r != 0.0 && r.is_finite())
        {
            dims.insert(DimensionKey::DEVICE_PIXEL_RATIO, format_number(ratio));
        }

        dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerConfig;
    use crate::cookies::jar::{CookieJar, MemoryCookieJar};
    use crate::page::staticpage::StaticPage;

    fn extract(page: &StaticPage, jar: &MemoryCookieJar) -> DimensionMapping {
        let config = TrackerConfig::default();
        let ctx = PageContext {
            page,
            cookies: jar,
            config: &config,
        };
        BrowserSignals.extract(&ctx)
    }

    #[test]
    fn test_defaults() {
        let dims = extract(&StaticPage::new(), &MemoryCookieJar::new());
        assert_eq!(dims.get(DimensionKey::HTTP_STATUS), Some("200"));
        assert_eq!(dims.get(DimensionKey::TLS_VERSION), Some("unknown"));
        assert!(!dims.contains(DimensionKey::DEVICE_PIXEL_RATIO));
        assert_eq!(dims.len(), 2);
    }

    #[test]
    fn test_reads_page_and_cookie() {
        let page = StaticPage::builder()
            .http_status_code(404)
            .device_pixel_ratio(2.0)
            .build();
        let jar = MemoryCookieJar::new();
        jar.set("TLSversion", "TLSv1.2");

        let dims = extract(&page, &jar);
        assert_eq!(dims.get(DimensionKey::HTTP_STATUS), Some("404"));
        assert_eq!(dims.get(DimensionKey::TLS_VERSION), Some("TLSv1.2"));
        assert_eq!(dims.get(DimensionKey::DEVICE_PIXEL_RATIO), Some("2"));
    }

    #[test]
    fn test_tls_version_is_not_json_decoded() {
        let jar = MemoryCookieJar::new();
        jar.set("TLSversion", "\"TLSv1.2\"");

        let dims = extract(&StaticPage::new(), &jar);
        assert_eq!(dims.get(DimensionKey::TLS_VERSION), Some("\"TLSv1.2\""));
    }

    #[test]
    fn test_fractional_pixel_ratio() {
        let page = StaticPage::builder().device_pixel_ratio(1.5).build();
        let dims = extract(&page, &MemoryCookieJar::new());
        assert_eq!(dims.get(DimensionKey::DEVICE_PIXEL_RATIO), Some("1.5"));
    }

    #[test]
    fn test_zero_values_fall_back() {
        let page = StaticPage::builder()
            .http_status_code(0)
            .device_pixel_ratio(0.0)
            .build();
        let jar = MemoryCookieJar::new();
        jar.set("TLSversion", "");

        let dims = extract(&page, &jar);
        assert_eq!(dims.get(DimensionKey::HTTP_STATUS), Some("200"));
        assert_eq!(dims.get(DimensionKey::TLS_VERSION), Some("unknown"));
        assert!(!dims.contains(DimensionKey::DEVICE_PIXEL_RATIO));
    }

    #[test]
    fn test_non_finite_pixel_ratio_is_omitted() {
        for ratio in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let page = StaticPage::builder().device_pixel_ratio(ratio).build();
            let dims = extract(&page, &MemoryCookieJar::new());
            assert!(!dims.contains(DimensionKey::DEVICE_PIXEL_RATIO));
        }
    }
}
