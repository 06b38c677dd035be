//! Fixed-size page selection over ordered listings.
//!
//! # Responsibility
//! - Slice an already-ordered listing into ten-record windows.
//! - Normalize collaborator-supplied page numbers.
//!
//! # Invariants
//! - Selection never fails: out-of-range pages yield an empty window.
//! - The window preserves the source order and never overlaps a
//!   neighbouring page.
//! - Selection never mutates or reorders the source listing.

/// Records shown per page. Fixed; collaborators cannot override it.
pub const PAGE_SIZE: usize = 10;

/// One page of an ordered listing, together with the context display
/// layers need for prev/next affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<T> {
    /// Records on this page, in source order. Empty beyond the last page.
    pub items: Vec<T>,
    /// Effective page number, always at least 1.
    pub page: u64,
    /// Total records in the source listing, across all pages.
    pub total: usize,
}

impl<T> PageWindow<T> {
    /// Whether an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether the listing continues past this page.
    pub fn has_next(&self) -> bool {
        (self.page as u128) * (PAGE_SIZE as u128) < self.total as u128
    }

    /// Number of pages needed to show the whole listing. Zero when the
    /// listing is empty.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(PAGE_SIZE)
    }
}

/// Returns the window of `items` for `requested`.
///
/// Zero and negative page numbers are treated as page one. A page past the
/// end of the listing yields an empty window with the requested page number
/// kept, so display layers can still render "page 40 of 3" style context.
pub fn select_page<T: Clone>(items: &[T], requested: i64) -> PageWindow<T> {
    let page = requested.max(1) as u64;
    let total = items.len();

    let start = (page - 1)
        .checked_mul(PAGE_SIZE as u64)
        .and_then(|offset| usize::try_from(offset).ok())
        .unwrap_or(usize::MAX);
    if start >= total {
        return PageWindow {
            items: Vec::new(),
            page,
            total,
        };
    }

    let end = total.min(start.saturating_add(PAGE_SIZE));
    PageWindow {
        items: items[start..end].to_vec(),
        page,
        total,
    }
}

/// Parses a raw page parameter, such as a query-string value.
///
/// Absent, blank or unparseable input falls back to page one; zero and
/// negative values are passed through for `select_page` to normalize.
pub fn parse_page_param(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(1)
}
