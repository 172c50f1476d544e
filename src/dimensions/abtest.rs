use crate::dimensions::{DimensionKey, DimensionMapping, DimensionSource, PageContext};

/// A/B assignments from `<meta name="govuk:ab-test..." data-analytics-dimension="N">`.
///
/// Only indices inside the configured band are reported, so a
/// misconfigured experiment cannot overwrite an unrelated dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbTestAssignments;

impl DimensionSource for AbTestAssignments {
    fn name(&self) -> &'static str {
        "ab-test"
    }

    fn extract(&self, ctx: &PageContext<'_>) -> DimensionMapping {
        let band = ctx.config.ab_test_range();
        let mut dims = DimensionMapping::new();

        for tag in ctx.page.meta_tags_with_prefix(&ctx.config.ab_test_prefix) {
            let index = tag
                .analytics_dimension
                .as_deref()
                .and_then(parse_leading_int)
                .and_then(|n| u32::try_from(n).ok());

            let Some(index) = index.filter(|i| band.contains(i)) else {
                tracing::debug!(
                    tag = %tag.name,
                    dimension = ?tag.analytics_dimension,
                    "dropping A/B tag outside the reserved dimension band"
                );
                continue;
            };

            if let Some(assignment) = tag.content {
                dims.insert(DimensionKey(index), assignment);
            }
        }
        dims
    }
}

/// Integer prefix of `raw`: leading whitespace and sign allowed, trailing
/// garbage ignored. `None` when no digits lead.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let n: i64 = digits[..end].parse().ok()?;
    Some(if negative { -n } else { n })
}
