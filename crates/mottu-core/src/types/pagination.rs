//! Pagination types for list endpoints.
//!
//! [`PageRequest::normalize`] clamps whatever the client sent into a valid
//! page, and [`PagedResult::assemble`] wraps one page of rows into the
//! list envelope together with its `self`/`prev`/`next` links.

use serde::{Deserialize, Serialize};

use super::link::{Link, LinkOrigin};

/// Page number used when the requested one is below 1.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the requested one is outside `[1, MAX_PAGE_SIZE]`.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page, in `[1, MAX_PAGE_SIZE]`.
    pub page_size: u64,
}

impl PageRequest {
    /// Normalize raw client input.
    ///
    /// A page below 1 becomes 1; a page size outside `[1, 100]` becomes 20
    /// (it is replaced, not clamped to the nearest bound).
    pub fn normalize(page: i64, page_size: i64) -> Self {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let page_size = u64::try_from(page_size)
            .ok()
            .filter(|s| (1..=MAX_PAGE_SIZE).contains(s))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, page_size }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Total number of pages for `total_count` rows (0 when there are none).
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of rows as returned by a repository, before links are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    /// Rows of the requested page, ordered by id.
    pub items: Vec<T>,
    /// Number of rows matching the query across all pages.
    pub total_count: u64,
}

impl<T> PageSlice<T> {
    /// Create a slice.
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// Convert every row, keeping the total.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageSlice<U> {
        PageSlice {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}

/// The path of a list endpoint plus the query parameters that must survive
/// in every navigation link (filters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPath {
    path: String,
    params: Vec<(String, String)>,
}

impl ListPath {
    /// A list path without extra parameters, e.g. `/api/zonas`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Carry a query parameter into every generated link.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Relative href for the given page.
    pub fn page_href(&self, page: u64, page_size: u64) -> String {
        let mut href = format!("{}?page={page}&pageSize={page_size}", self.path);
        for (key, value) in &self.params {
            href.push('&');
            href.push_str(&urlencoding::encode(key));
            href.push('=');
            href.push_str(&urlencoding::encode(value));
        }
        href
    }
}

/// Paginated list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Navigation links.
    pub links: Vec<Link>,
}

impl<T> PagedResult<T> {
    /// Assemble the envelope for one page.
    ///
    /// `self` is always present; `prev` only after the first page; `next`
    /// only while `page < ceil(total_count / page_size)`.
    pub fn assemble(
        slice: PageSlice<T>,
        request: &PageRequest,
        origin: &LinkOrigin,
        list_path: &ListPath,
    ) -> Self {
        let PageRequest { page, page_size } = *request;
        let mut links = vec![origin.link(
            Link::SELF,
            &list_path.page_href(page, page_size),
            "GET",
        )];

        if page > 1 {
            links.push(origin.link(
                Link::PREV,
                &list_path.page_href(page - 1, page_size),
                "GET",
            ));
        }

        if page < request.total_pages(slice.total_count) {
            links.push(origin.link(
                Link::NEXT,
                &list_path.page_href(page + 1, page_size),
                "GET",
            ));
        }

        Self {
            items: slice.items,
            page,
            page_size,
            total_count: slice.total_count,
            links,
        }
    }

    /// Find a link by relation.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> LinkOrigin {
        LinkOrigin::new("http", "localhost:8080")
    }

    fn assemble(page: i64, page_size: i64, total: u64) -> PagedResult<u32> {
        let request = PageRequest::normalize(page, page_size);
        PagedResult::assemble(
            PageSlice::new(Vec::new(), total),
            &request,
            &origin(),
            &ListPath::new("/api/patios"),
        )
    }

    #[test]
    fn test_normalize_defaults_out_of_range_values() {
        assert_eq!(PageRequest::normalize(0, 0), PageRequest::new_unchecked(1, 20));
        assert_eq!(PageRequest::normalize(-4, 101), PageRequest::new_unchecked(1, 20));
        assert_eq!(PageRequest::normalize(3, -1), PageRequest::new_unchecked(3, 20));
        assert_eq!(PageRequest::normalize(7, 100), PageRequest::new_unchecked(7, 100));
        assert_eq!(PageRequest::normalize(1, 1), PageRequest::new_unchecked(1, 1));
    }

    #[test]
    fn test_normalize_is_idempotent_for_valid_pairs() {
        for page in [1_i64, 2, 17, 10_000] {
            for size in [1_i64, 20, 55, 100] {
                let once = PageRequest::normalize(page, size);
                let twice = PageRequest::normalize(once.page as i64, once.page_size as i64);
                assert_eq!(once, twice);
                assert_eq!(once.page as i64, page);
                assert_eq!(once.page_size as i64, size);
            }
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::normalize(1, 20).offset(), 0);
        assert_eq!(PageRequest::normalize(3, 20).offset(), 40);
    }

    #[test]
    fn test_next_present_iff_more_rows_remain() {
        for total in 0_u64..=45 {
            for page in 1_i64..=5 {
                for size in [1_i64, 7, 10, 20] {
                    let result = assemble(page, size, total);
                    let expected = (page as u64) * (size as u64) < total;
                    assert_eq!(
                        result.link(Link::NEXT).is_some(),
                        expected,
                        "page={page} size={size} total={total}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_prev_present_iff_past_first_page() {
        let first = assemble(1, 10, 100);
        assert!(first.link(Link::PREV).is_none());

        let third = assemble(3, 10, 100);
        let prev = third.link(Link::PREV).expect("prev link");
        assert_eq!(prev.href, "http://localhost:8080/api/patios?page=2&pageSize=10");
        assert_eq!(prev.method, "GET");
    }

    #[test]
    fn test_self_link_always_first() {
        let result = assemble(2, 5, 0);
        assert_eq!(result.links[0].rel, "self");
        assert_eq!(
            result.links[0].href,
            "http://localhost:8080/api/patios?page=2&pageSize=5"
        );
    }

    #[test]
    fn test_filter_params_are_carried_and_encoded() {
        let path = ListPath::new("/api/motos").with_param("placa", "ABC 1");
        assert_eq!(
            path.page_href(2, 20),
            "/api/motos?page=2&pageSize=20&placa=ABC%201"
        );
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let result = PagedResult::assemble(
            PageSlice::new(vec![1_u32, 2], 2),
            &PageRequest::default(),
            &origin(),
            &ListPath::new("/api/zonas"),
        );
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["pageSize"], 20);
        assert_eq!(json["totalCount"], 2);
        assert_eq!(json["items"], serde_json::json!([1, 2]));
        assert_eq!(json["links"][0]["rel"], "self");
    }

    #[test]
    fn test_slice_map_keeps_total() {
        let slice = PageSlice::new(vec![1, 2, 3], 42).map(|n| n * 10);
        assert_eq!(slice.items, vec![10, 20, 30]);
        assert_eq!(slice.total_count, 42);
    }

    impl PageRequest {
        fn new_unchecked(page: u64, page_size: u64) -> Self {
            Self { page, page_size }
        }
    }
}
