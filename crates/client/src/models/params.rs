//! Request parameters for read operations.
//!
//! # What this module handles:
//! - The alert list parameter set and its caller-wins override merge
//! - Note listing and on-call lookup parameters
//!
//! # What this module does NOT handle:
//! - Deciding which filter or page to request (see [`crate::query`])

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tygenie_config::constants::{DEFAULT_LIST_LIMIT, DEFAULT_LIST_SORT};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse the wire spelling (`asc`/`desc`, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys carried by the typed fields of [`ListAlertsParams`].
const TYPED_LIST_KEYS: [&str; 5] = ["limit", "sort", "order", "offset", "query"];

/// Parameter set of a `list_alerts` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAlertsParams {
    pub limit: u32,
    pub sort: String,
    pub order: SortOrder,
    pub offset: u64,
    pub query: String,
    /// Additional query parameters passed through verbatim
    /// (e.g. `searchIdentifier`, `searchIdentifierType`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Default for ListAlertsParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            sort: DEFAULT_LIST_SORT.to_string(),
            order: SortOrder::Desc,
            offset: 0,
            query: String::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl ListAlertsParams {
    /// Apply caller overrides; every key the caller set wins.
    ///
    /// An `extra` entry named like a typed field replaces that field instead
    /// of travelling as a second query parameter. The typed override wins when
    /// both are given. Unparseable values (and a zero limit) are dropped.
    pub fn merge(mut self, overrides: ParamOverrides) -> Self {
        for (key, value) in overrides.extra {
            self.apply_extra(key, value);
        }
        if let Some(limit) = overrides.limit {
            self.limit = limit;
        }
        if let Some(sort) = overrides.sort {
            self.sort = sort;
        }
        if let Some(order) = overrides.order {
            self.order = order;
        }
        if let Some(offset) = overrides.offset {
            self.offset = offset;
        }
        if let Some(query) = overrides.query {
            self.query = query;
        }
        self
    }

    fn apply_extra(&mut self, key: String, value: String) {
        match key.as_str() {
            "limit" => {
                if let Some(limit) = value.trim().parse().ok().filter(|l: &u32| *l > 0) {
                    self.limit = limit;
                }
            }
            "offset" => {
                if let Ok(offset) = value.trim().parse() {
                    self.offset = offset;
                }
            }
            "order" => {
                if let Some(order) = SortOrder::parse(value.trim()) {
                    self.order = order;
                }
            }
            "sort" => self.sort = value,
            "query" => self.query = value,
            _ => {
                self.extra.insert(key, value);
            }
        }
    }

    /// Query pairs as sent on the wire.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("sort".to_string(), self.sort.clone()),
            ("order".to_string(), self.order.to_string()),
            ("offset".to_string(), self.offset.to_string()),
            ("query".to_string(), self.query.clone()),
        ];
        pairs.extend(
            self.extra
                .iter()
                .filter(|(k, _)| !TYPED_LIST_KEYS.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        pairs
    }
}

/// Caller-supplied overrides for [`ListAlertsParams`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamOverrides {
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
    pub offset: Option<u64>,
    pub query: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl ParamOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Direction of note pagination relative to `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteDirection {
    Next,
    Prev,
}

impl NoteDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

/// Optional paging of `list_notes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesParams {
    pub offset: Option<String>,
    pub direction: Option<NoteDirection>,
    pub order: Option<SortOrder>,
    pub limit: Option<u32>,
}

impl NotesParams {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(offset) = &self.offset {
            pairs.push(("offset".to_string(), offset.clone()));
        }
        if let Some(direction) = self.direction {
            pairs.push(("direction".to_string(), direction.as_str().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order".to_string(), order.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Caller overrides for the on-call lookup; unset fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnCallParams {
    pub flat: Option<bool>,
    pub date: Option<DateTime<Utc>>,
}

impl OnCallParams {
    /// Fill unset fields with `flat = true` and `date = now`.
    pub fn resolve(self, now: DateTime<Utc>) -> OnCallQuery {
        OnCallQuery {
            flat: self.flat.unwrap_or(true),
            date: self.date.unwrap_or(now),
        }
    }
}

/// Fully resolved on-call lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCallQuery {
    pub flat: bool,
    pub date: DateTime<Utc>,
}

impl OnCallQuery {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("flat".to_string(), self.flat.to_string()),
            (
                "date".to_string(),
                self.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
        ]
    }
}
