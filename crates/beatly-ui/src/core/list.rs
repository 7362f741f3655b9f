//! Generic paginated list-fetching state shared by collection screens.
//!
//! # Design
//! - Pure state transitions so ordering rules are testable outside wasm.
//! - Every fetch carries a sequence id; only the latest issued fetch may
//!   apply its outcome, so a slow response can never overwrite a newer one.
//! - Changing sort or page size invalidates the current page and resets to
//!   page 1; page navigation touches nothing but the page.

use std::fmt::Write;

/// Default page size offered by the collection endpoints.
pub const DEFAULT_LIMIT: u32 = 20;
/// Page size choices exposed by the limit selector.
pub const LIMIT_CHOICES: [u32; 3] = [20, 50, 100];

/// Sort keys accepted by the video collection endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Order by upload timestamp.
    #[default]
    CreatedAt,
    /// Order by view count.
    Views,
}

impl SortKey {
    /// Wire-level query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Views => "views",
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire-level query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Parse a `sortBy|order` select-control value into typed sort parameters.
#[must_use]
pub fn parse_sort_value(value: &str) -> Option<(SortKey, SortOrder)> {
    let (key, order) = value.split_once('|')?;
    let key = match key {
        "createdAt" => SortKey::CreatedAt,
        "views" => SortKey::Views,
        _ => return None,
    };
    let order = match order {
        "asc" => SortOrder::Asc,
        "desc" => SortOrder::Desc,
        _ => return None,
    };
    Some((key, order))
}

/// Pagination and sort parameters governing one collection fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page to fetch.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: SortKey::default(),
            order: SortOrder::default(),
        }
    }
}

impl ListQuery {
    /// Serialize the query as URL parameters, including only set values.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(4);
        if self.page > 0 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.limit > 0 {
            pairs.push(("limit", self.limit.to_string()));
        }
        pairs.push(("sortBy", self.sort_by.as_str().to_string()));
        pairs.push(("order", self.order.as_str().to_string()));
        let mut out = String::new();
        for (key, value) in pairs {
            if !out.is_empty() {
                out.push('&');
            }
            let _ = write!(out, "{key}={}", urlencoding::encode(&value));
        }
        out
    }
}

/// Materialized page of items plus pagination metadata.
///
/// Superseded wholesale on the next fetch; nothing merges incrementally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListResult<T> {
    /// Items in server order.
    pub items: Vec<T>,
    /// 1-based page the server actually served.
    pub current_page: u32,
    /// Total pages for the query.
    pub total_pages: u32,
    /// Total matching items across all pages.
    pub total_count: u64,
}

/// Lifecycle of the current fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Ready,
    /// The latest fetch failed.
    Failed,
}

/// Full controller state for one collection screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState<T> {
    /// Current fetch lifecycle.
    pub status: ListStatus,
    /// Parameters of the next/current fetch.
    pub query: ListQuery,
    /// Last applied page, if any.
    pub result: Option<ListResult<T>>,
    /// Error message of the last failed fetch, if any.
    pub error: Option<String>,
    issued_seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            status: ListStatus::default(),
            query: ListQuery::default(),
            result: None,
            error: None,
            issued_seq: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Change sort parameters. Any actual change invalidates the current
    /// page's meaning, so the page resets to 1.
    pub fn set_sort(&mut self, sort_by: SortKey, order: SortOrder) {
        if self.query.sort_by != sort_by || self.query.order != order {
            self.query.sort_by = sort_by;
            self.query.order = order;
            self.query.page = 1;
        }
    }

    /// Change the page size. As with sorting, a change resets to page 1.
    pub fn set_limit(&mut self, limit: u32) {
        if limit > 0 && self.query.limit != limit {
            self.query.limit = limit;
            self.query.page = 1;
        }
    }

    /// Total pages known from the last result, never below 1.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.result.as_ref().map_or(1, |r| r.total_pages.max(1))
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.query.page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.query.page < self.total_pages()
    }

    /// Navigate to a page, clamped to `[1, total_pages]`. Returns whether the
    /// page actually changed; boundary moves are no-ops.
    pub fn go_to(&mut self, page: u32) -> bool {
        let clamped = page.clamp(1, self.total_pages());
        if clamped == self.query.page {
            return false;
        }
        self.query.page = clamped;
        true
    }

    /// Jump to the first page.
    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    /// Step back one page.
    pub fn previous(&mut self) -> bool {
        let target = self.query.page.saturating_sub(1);
        self.go_to(target.max(1))
    }

    /// Step forward one page.
    pub fn next(&mut self) -> bool {
        let target = self.query.page.saturating_add(1);
        self.go_to(target)
    }

    /// Jump to the last known page.
    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages())
    }

    /// Start a fetch: transition to Loading and hand back the sequence id the
    /// completion must present to be applied.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.status = ListStatus::Loading;
        self.issued_seq
    }

    /// Apply a successful fetch. Returns `false` (discarding the result) when
    /// a newer fetch has been issued since `seq` was handed out.
    pub fn apply_success(&mut self, seq: u64, result: ListResult<T>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.status = ListStatus::Ready;
        self.error = None;
        self.result = Some(result);
        true
    }

    /// Apply a failed fetch under the same staleness rule as
    /// [`ListState::apply_success`].
    pub fn apply_failure(&mut self, seq: u64, message: String) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.status = ListStatus::Failed;
        self.error = Some(message);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_LIMIT, ListQuery, ListResult, ListState, ListStatus, SortKey, SortOrder,
        parse_sort_value,
    };

    fn page(items: &[&str], current: u32, total: u32) -> ListResult<String> {
        ListResult {
            items: items.iter().map(ToString::to_string).collect(),
            current_page: current,
            total_pages: total,
            total_count: u64::from(total) * u64::from(DEFAULT_LIMIT),
        }
    }

    fn ready_state(total_pages: u32) -> ListState<String> {
        let mut state = ListState::default();
        let seq = state.begin_fetch();
        assert!(state.apply_success(seq, page(&["a"], 1, total_pages)));
        state
    }

    #[test]
    fn defaults_match_the_collection_endpoints() {
        let query = ListQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.sort_by, SortKey::CreatedAt);
        assert_eq!(query.order, SortOrder::Desc);
    }

    #[test]
    fn sort_change_resets_page() {
        let mut state = ready_state(9);
        state.go_to(4);
        state.set_sort(SortKey::Views, SortOrder::Desc);
        assert_eq!(state.query.page, 1);
        assert_eq!(state.query.sort_by, SortKey::Views);
    }

    #[test]
    fn order_change_alone_resets_page() {
        let mut state = ready_state(9);
        state.go_to(3);
        state.set_sort(SortKey::CreatedAt, SortOrder::Asc);
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn identical_sort_keeps_page() {
        let mut state = ready_state(9);
        state.go_to(3);
        state.set_sort(SortKey::CreatedAt, SortOrder::Desc);
        assert_eq!(state.query.page, 3);
    }

    #[test]
    fn limit_change_resets_page_and_keeps_sort() {
        let mut state = ready_state(9);
        state.set_sort(SortKey::Views, SortOrder::Asc);
        state.go_to(2);
        state.set_limit(50);
        assert_eq!(state.query.page, 1);
        assert_eq!(state.query.limit, 50);
        assert_eq!(state.query.sort_by, SortKey::Views);
        assert_eq!(state.query.order, SortOrder::Asc);
    }

    #[test]
    fn page_navigation_touches_only_the_page() {
        let mut state = ready_state(9);
        state.go_to(5);
        assert_eq!(state.query.page, 5);
        assert_eq!(state.query.limit, DEFAULT_LIMIT);
        assert_eq!(state.query.sort_by, SortKey::CreatedAt);
    }

    #[test]
    fn navigation_clamps_to_bounds() {
        let mut state = ready_state(3);
        assert!(!state.previous());
        assert!(!state.first());
        state.go_to(99);
        assert_eq!(state.query.page, 3);
        assert!(!state.next());
        assert!(!state.last());
        assert!(state.first());
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn boundary_helpers_report_availability() {
        let mut state = ready_state(2);
        assert!(!state.has_previous());
        assert!(state.has_next());
        state.next();
        assert!(state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn stale_success_is_discarded() {
        let mut state: ListState<String> = ListState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        // The newer fetch completes first.
        assert!(state.apply_success(second, page(&["new"], 1, 1)));
        // The older response then arrives and must not overwrite it.
        assert!(!state.apply_success(first, page(&["old"], 1, 1)));
        let result = state.result.expect("latest result kept");
        assert_eq!(result.items, vec!["new".to_string()]);
        assert_eq!(state.status, ListStatus::Ready);
    }

    #[test]
    fn stale_failure_cannot_mask_a_newer_success() {
        let mut state: ListState<String> = ListState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(state.apply_success(second, page(&["new"], 1, 1)));
        assert!(!state.apply_failure(first, "timed out".to_string()));
        assert_eq!(state.status, ListStatus::Ready);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_records_the_message() {
        let mut state: ListState<String> = ListState::default();
        let seq = state.begin_fetch();
        assert_eq!(state.status, ListStatus::Loading);
        assert!(state.apply_failure(seq, "boom".to_string()));
        assert_eq!(state.status, ListStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn query_string_serializes_set_values() {
        let query = ListQuery::default();
        assert_eq!(query.to_query_string(), "page=1&limit=20&sortBy=createdAt&order=desc");
        let zero_limit = ListQuery { limit: 0, ..ListQuery::default() };
        assert_eq!(zero_limit.to_query_string(), "page=1&sortBy=createdAt&order=desc");
    }

    #[test]
    fn sort_values_parse_from_select_controls() {
        assert_eq!(
            parse_sort_value("createdAt|desc"),
            Some((SortKey::CreatedAt, SortOrder::Desc))
        );
        assert_eq!(parse_sort_value("views|desc"), Some((SortKey::Views, SortOrder::Desc)));
        assert_eq!(parse_sort_value("views"), None);
        assert_eq!(parse_sort_value("title|asc"), None);
    }
}
