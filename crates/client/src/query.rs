//! Alert list pagination and filter resolution.
//!
//! Responsibilities:
//! - Resolve a named filter to its Opsgenie search query.
//! - Track the current offset and build the parameter set of the next
//!   `list_alerts` call.
//!
//! Does NOT handle:
//! - Sending the request (see [`crate::ApiFacade::list_alerts`]).
//! - Detecting the last page; requesting past the end yields an empty page.
//!
//! Invariants:
//! - The page size is never zero: a missing, zero, or negative configured
//!   limit falls back to the built-in default.
//! - The offset never goes below zero.
//! - The filter name is sticky: once a name has been attempted, calls without
//!   a name repeat it, even if the lookup failed.
//! - The page size is re-read from the live settings on every access, so
//!   config edits apply without restarting the session.
//!
//! Single-writer: a `QueryState` belongs to one session and is not shared
//! across concurrent pagination requests.

use std::sync::Arc;

use tygenie_config::{SettingsProvider, constants::DEFAULT_QUERY_SORT};

use crate::activity::ActivityLogger;
use crate::models::{ListAlertsParams, ParamOverrides, SortOrder};

/// Pagination and filter state of one alert list session.
pub struct QueryState {
    settings: Arc<dyn SettingsProvider>,
    logger: ActivityLogger,
    sort: String,
    order: SortOrder,
    offset: u64,
    current_filter: Option<String>,
    current: Option<ListAlertsParams>,
}

impl std::fmt::Debug for QueryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryState")
            .field("sort", &self.sort)
            .field("order", &self.order)
            .field("offset", &self.offset)
            .field("current_filter", &self.current_filter)
            .finish_non_exhaustive()
    }
}

impl QueryState {
    pub fn new(settings: Arc<dyn SettingsProvider>, logger: ActivityLogger) -> Self {
        Self {
            settings,
            logger,
            sort: DEFAULT_QUERY_SORT.to_string(),
            order: SortOrder::Desc,
            offset: 0,
            current_filter: None,
            current: None,
        }
    }

    /// Page size, read from the live settings.
    pub fn limit(&self) -> u32 {
        self.settings.settings().tygenie.alerts.effective_limit()
    }

    /// Resolve an explicit page size.
    ///
    /// Returns `value`, or the configured page size when `value` is zero.
    /// Subsequent reads of [`Self::limit`] still follow the live settings.
    pub fn set_limit(&mut self, value: u32) -> u32 {
        if value == 0 { self.limit() } else { value }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Name of the last filter attempted, if any.
    pub fn current_filter(&self) -> Option<&str> {
        self.current_filter.as_deref()
    }

    /// Parameter set produced by the last [`Self::get`].
    pub fn current(&self) -> Option<&ListAlertsParams> {
        self.current.as_ref()
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }

    pub fn set_sort(&mut self, sort: impl Into<String>) {
        self.sort = sort.into();
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Go back to the first page. Used when a different filter is selected.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Resolve a filter name to its search query.
    ///
    /// Lookup order: the explicit name, then the last attempted name, then the
    /// configured default filter. No name, or a name missing from the filter
    /// table, yields an empty query.
    pub fn resolve_filter(&mut self, filter_name: Option<&str>) -> String {
        let settings = self.settings.settings();
        let name = filter_name
            .map(str::to_string)
            .or_else(|| self.current_filter.clone())
            .or_else(|| settings.tygenie.default_filter.clone());

        let query = match name.as_deref() {
            Some(name) => match settings.tygenie.filter_query(name) {
                Some(query) => query.to_string(),
                None => {
                    self.logger.log(&format!("Custom filter '{name}' not found"));
                    tracing::debug!(filter = name, "Custom filter not found");
                    String::new()
                }
            },
            None => String::new(),
        };

        self.current_filter = name;
        query
    }

    /// Build the parameter set for the current page.
    ///
    /// `overrides` win over the computed values on every key they set.
    pub fn get(
        &mut self,
        filter_name: Option<&str>,
        overrides: ParamOverrides,
    ) -> ListAlertsParams {
        let query = self.resolve_filter(filter_name);
        let params = ListAlertsParams {
            limit: self.limit(),
            sort: self.sort.clone(),
            order: self.order,
            offset: self.offset,
            query,
            extra: Default::default(),
        }
        .merge(overrides);

        self.current = Some(params.clone());
        params
    }

    /// Advance one page and build its parameter set.
    pub fn next_page(&mut self) -> ListAlertsParams {
        self.offset = self.offset.saturating_add(u64::from(self.limit()));
        self.logger.log(&format!("Next page requested, offset {}", self.offset));
        self.get(None, ParamOverrides::new().with_offset(self.offset))
    }

    /// Go back one page (never before the first) and build its parameter set.
    pub fn previous_page(&mut self) -> ListAlertsParams {
        self.offset = self.offset.saturating_sub(u64::from(self.limit()));
        self.logger.log(&format!("Previous page requested, offset {}", self.offset));
        self.get(None, ParamOverrides::new().with_offset(self.offset))
    }

    /// 1-based page number of the current offset.
    pub fn current_page_number(&self) -> u64 {
        self.offset / u64::from(self.limit()) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tygenie_config::{FilterDefinition, Settings, SharedSettings};

    fn settings_with(limit: Option<i64>, default_filter: Option<&str>) -> Settings {
        let mut settings = Settings::default();
        settings.tygenie.alerts.limit = limit;
        settings.tygenie.default_filter = default_filter.map(str::to_string);
        settings
            .tygenie
            .filters
            .insert("open".to_string(), FilterDefinition::new("status:open"));
        settings
            .tygenie
            .filters
            .insert("mine".to_string(), FilterDefinition::new("owner:jdoe"));
        settings
    }

    fn state(settings: Settings) -> QueryState {
        let provider: Arc<dyn SettingsProvider> = Arc::new(settings);
        let logger = ActivityLogger::new(provider.clone());
        QueryState::new(provider, logger)
    }

    #[test]
    fn test_new_state_defaults() {
        let state = state(Settings::default());
        assert_eq!(state.sort(), "createdAt");
        assert_eq!(state.order(), SortOrder::Desc);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.current_filter(), None);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_resolve_explicit_filter() {
        let mut state = state(settings_with(None, None));
        assert_eq!(state.resolve_filter(Some("open")), "status:open");
        assert_eq!(state.current_filter(), Some("open"));
    }

    #[test]
    fn test_resolve_falls_back_to_last_then_default() {
        let mut state = state(settings_with(None, Some("mine")));
        assert_eq!(state.resolve_filter(None), "owner:jdoe");
        assert_eq!(state.current_filter(), Some("mine"));

        state.resolve_filter(Some("open"));
        assert_eq!(state.resolve_filter(None), "status:open");
    }

    #[test]
    fn test_resolve_without_any_filter_is_empty() {
        let mut state = state(Settings::default());
        assert_eq!(state.resolve_filter(None), "");
        assert_eq!(state.current_filter(), None);
    }

    #[test]
    fn test_unknown_filter_is_sticky() {
        let mut state = state(settings_with(None, Some("open")));
        assert_eq!(state.resolve_filter(Some("typo")), "");
        assert_eq!(state.current_filter(), Some("typo"));
        // the failed name is repeated rather than reverting to the default
        assert_eq!(state.resolve_filter(None), "");
        assert_eq!(state.current_filter(), Some("typo"));
    }

    #[test]
    fn test_get_builds_params_and_caches_current() {
        let mut state = state(settings_with(Some(10), None));
        let params = state.get(Some("open"), ParamOverrides::new());
        assert_eq!(params.limit, 10);
        assert_eq!(params.sort, "createdAt");
        assert_eq!(params.order, SortOrder::Desc);
        assert_eq!(params.offset, 0);
        assert_eq!(params.query, "status:open");
        assert_eq!(state.current(), Some(&params));
    }

    #[test]
    fn test_get_overrides_win() {
        let mut state = state(settings_with(Some(10), None));
        let params = state.get(
            Some("open"),
            ParamOverrides::new()
                .with_query("status:closed")
                .with_limit(3),
        );
        assert_eq!(params.query, "status:closed");
        assert_eq!(params.limit, 3);
    }

    #[test]
    fn test_next_and_previous_pages() {
        let mut state = state(settings_with(Some(22), None));
        assert_eq!(state.next_page().offset, 22);
        assert_eq!(state.next_page().offset, 44);
        assert_eq!(state.current_page_number(), 3);
        assert_eq!(state.previous_page().offset, 22);
        assert_eq!(state.previous_page().offset, 0);
        assert_eq!(state.previous_page().offset, 0);
        assert_eq!(state.current_page_number(), 1);
    }

    #[test]
    fn test_zero_or_negative_limit_uses_default() {
        assert_eq!(state(settings_with(Some(0), None)).limit(), 22);
        assert_eq!(state(settings_with(Some(-5), None)).limit(), 22);
        assert_eq!(state(settings_with(None, None)).limit(), 22);
    }

    #[test]
    fn test_set_limit() {
        let mut state = state(settings_with(Some(30), None));
        assert_eq!(state.set_limit(5), 5);
        assert_eq!(state.set_limit(0), 30);
        assert_eq!(state.limit(), 30);
    }

    #[test]
    fn test_limit_follows_live_settings() {
        let shared = Arc::new(SharedSettings::new(settings_with(Some(10), None)));
        let provider: Arc<dyn SettingsProvider> = shared.clone();
        let mut state = QueryState::new(provider.clone(), ActivityLogger::new(provider));

        assert_eq!(state.next_page().offset, 10);
        shared.update(|s| s.tygenie.alerts.limit = Some(25));
        assert_eq!(state.limit(), 25);
        assert_eq!(state.next_page().offset, 35);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut state = state(settings_with(Some(10), None));
        state.next_page();
        state.reset();
        assert_eq!(state.offset(), 0);
        assert_eq!(state.current_page_number(), 1);
    }
}
