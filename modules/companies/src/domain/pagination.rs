//! Offset/limit pagination over the filtered company list.

use super::model::EnrichedCompany;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Requested page window, already normalized.
///
/// Both values are non-negative. A limit of zero yields an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PageRequest {
    /// Builds a window from raw query values.
    ///
    /// Unparsable values fall back to the defaults, as does a limit of zero.
    /// Negative values are clamped to zero.
    #[must_use]
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = match limit.and_then(parse_leading_int) {
            None | Some(0) => DEFAULT_LIMIT,
            Some(v) => v.max(0),
        };
        let offset = offset
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_OFFSET)
            .max(0);
        Self { limit, offset }
    }
}

/// Metadata reported next to a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Size of the filtered list before slicing.
    pub total: usize,
    pub limit: i64,
    pub offset: i64,
    /// Number of records in this page.
    pub count: usize,
}

/// A page of enriched companies.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyPage {
    pub items: Vec<EnrichedCompany>,
    pub page_info: PageInfo,
}

/// Slices `items` to the requested window.
///
/// An offset past the end yields an empty page; `total` always reflects the
/// unsliced length.
#[must_use]
pub fn paginate(items: Vec<EnrichedCompany>, request: PageRequest) -> CompanyPage {
    let total = items.len();
    let start = usize::try_from(request.offset).unwrap_or(usize::MAX).min(total);
    let len = usize::try_from(request.limit).unwrap_or(0);
    let end = start.saturating_add(len).min(total);

    let page: Vec<EnrichedCompany> = items.into_iter().skip(start).take(end - start).collect();
    let count = page.len();

    CompanyPage {
        items: page,
        page_info: PageInfo {
            total,
            limit: request.limit,
            offset: request.offset,
            count,
        },
    }
}

/// Lenient integer parse: leading whitespace, an optional sign, then the
/// leading run of ASCII digits. `"12abc"` is 12 and `"3.9"` is 3.
///
/// Returns `None` when no digit follows the sign, or on overflow.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
