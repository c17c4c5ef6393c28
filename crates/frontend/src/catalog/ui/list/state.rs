use contracts::catalog::CatalogQuery;
use leptos::prelude::*;

/// Page-scoped filter and pagination state for the catalog list.
///
/// Plain data with synchronous transitions, so the fetch/guard logic is
/// testable without a DOM. `vendor` is read from the page URL once at
/// startup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub page: u32,
    pub category: Option<String>,
    pub status: Option<String>,
    pub vendor: Option<String>,
    pub is_fetching: bool,
    pub request_seq: u64,
}

impl CatalogState {
    pub fn new(vendor: Option<String>) -> Self {
        Self {
            page: 1,
            category: None,
            status: None,
            vendor,
            is_fetching: false,
            request_seq: 0,
        }
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.category = category;
        self.reset_pagination();
    }

    pub fn select_status(&mut self, status: Option<String>) {
        self.status = status;
        self.reset_pagination();
    }

    // Any filter change restarts from page 1 and invalidates a response
    // still in flight for the old filter.
    fn reset_pagination(&mut self) {
        self.page = 1;
        self.request_seq += 1;
        self.is_fetching = false;
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Acquire the in-flight guard. Returns a token identifying the new
    /// request, or `None` when a fetch is already running.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.is_fetching {
            return None;
        }
        self.is_fetching = true;
        self.request_seq += 1;
        Some(self.request_seq)
    }

    /// Release the guard for the request identified by `token`.
    ///
    /// Returns `false` when the token is stale: the caller must discard
    /// the response without touching the page.
    pub fn finish_fetch(&mut self, token: u64) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.is_fetching = false;
        true
    }

    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            page: self.page,
            vendor: self.vendor.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
        }
    }
}

pub fn create_state(vendor: Option<String>) -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::new(vendor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_fetch_is_exclusive() {
        let mut state = CatalogState::new(None);
        let token = state.begin_fetch();
        assert!(token.is_some());
        assert_eq!(state.begin_fetch(), None);

        assert!(state.finish_fetch(token.unwrap()));
        assert!(state.begin_fetch().is_some());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = CatalogState::new(None);
        state.next_page();
        state.next_page();
        assert_eq!(state.page, 3);

        state.select_category(Some("Snacks".to_string()));
        assert_eq!(state.page, 1);
        assert_eq!(state.category.as_deref(), Some("Snacks"));

        state.next_page();
        state.select_status(Some("vegan".to_string()));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_filter_change_invalidates_in_flight_response() {
        let mut state = CatalogState::new(None);
        let token = state.begin_fetch().unwrap();

        state.select_category(Some("Drinks".to_string()));

        // The old response is stale and must be discarded; the new filter
        // is free to fetch.
        assert!(!state.finish_fetch(token));
        assert!(state.begin_fetch().is_some());
    }

    #[test]
    fn test_stale_token_does_not_release_newer_guard() {
        let mut state = CatalogState::new(None);
        let first = state.begin_fetch().unwrap();
        state.select_status(Some("non_vegan".to_string()));
        let second = state.begin_fetch().unwrap();

        assert!(!state.finish_fetch(first));
        assert!(state.is_fetching);
        assert!(state.finish_fetch(second));
        assert!(!state.is_fetching);
    }

    #[test]
    fn test_query_carries_vendor_across_transitions() {
        let mut state = CatalogState::new(Some("GreenMart".to_string()));
        assert_eq!(state.query().to_query_string(), "page=1&vendor=GreenMart");

        state.select_category(Some("Snacks".to_string()));
        state.next_page();
        assert_eq!(
            state.query().to_query_string(),
            "page=2&vendor=GreenMart&category=Snacks"
        );

        state.select_status(Some("vegan".to_string()));
        assert_eq!(
            state.query().to_query_string(),
            "page=1&vendor=GreenMart&category=Snacks&status=vegan"
        );
    }

    #[test]
    fn test_clearing_filters_returns_to_unfiltered_query() {
        let mut state = CatalogState::new(Some("GreenMart".to_string()));
        state.select_category(Some("Snacks".to_string()));
        state.select_category(None);
        assert_eq!(state.query().to_query_string(), "page=1&vendor=GreenMart");
    }
}
