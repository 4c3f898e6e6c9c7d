//! Remote operation descriptors and their route table.
//!
//! Responsibilities:
//! - Name every remote operation the façade can invoke (`OperationKind`).
//! - Map each kind to its HTTP method and path template (`ROUTES`).
//! - Carry the typed parameters of one call (`Operation`) and shape them into
//!   path segments, query pairs, and a JSON body.
//!
//! Does NOT handle:
//! - Sending requests or interpreting responses (see [`crate::client`]).
//!
//! Invariants:
//! - `ROUTES` holds exactly one entry per `OperationKind`, in declaration order.
//! - Alert identifiers are inserted as a single path segment and percent-encoded
//!   by the URL builder, never spliced into the raw path.

use std::fmt;

use serde_json::{Map, Value};

use crate::models::{
    ActionPayload, AlertRef, ListAlertsParams, NotesParams, OnCallQuery, RemoveTagsParams,
    TagPayload,
};

/// Placeholder segment replaced by the alert identifier.
const IDENTIFIER_SEGMENT: &str = "{identifier}";

/// Every remote operation of the Opsgenie API used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    GetAccountInfo,
    CountAlerts,
    ListAlerts,
    GetAlert,
    ListNotes,
    AcknowledgeAlert,
    UnAcknowledgeAlert,
    CloseAlert,
    AddNote,
    AddTags,
    RemoveTags,
    ListSchedules,
    GetOnCalls,
}

/// HTTP method of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub kind: OperationKind,
    pub method: HttpMethod,
    pub path: &'static str,
    pub name: &'static str,
}

/// Route table, indexed by `OperationKind` discriminant.
pub const ROUTES: &[Route] = &[
    Route {
        kind: OperationKind::GetAccountInfo,
        method: HttpMethod::Get,
        path: "/v2/account",
        name: "get_info",
    },
    Route {
        kind: OperationKind::CountAlerts,
        method: HttpMethod::Get,
        path: "/v2/alerts/count",
        name: "count_alerts",
    },
    Route {
        kind: OperationKind::ListAlerts,
        method: HttpMethod::Get,
        path: "/v2/alerts",
        name: "list_alerts",
    },
    Route {
        kind: OperationKind::GetAlert,
        method: HttpMethod::Get,
        path: "/v2/alerts/{identifier}",
        name: "get_alert",
    },
    Route {
        kind: OperationKind::ListNotes,
        method: HttpMethod::Get,
        path: "/v2/alerts/{identifier}/notes",
        name: "list_notes",
    },
    Route {
        kind: OperationKind::AcknowledgeAlert,
        method: HttpMethod::Post,
        path: "/v2/alerts/{identifier}/acknowledge",
        name: "acknowledge_alert",
    },
    Route {
        kind: OperationKind::UnAcknowledgeAlert,
        method: HttpMethod::Post,
        path: "/v2/alerts/{identifier}/unacknowledge",
        name: "un_acknowledge_alert",
    },
    Route {
        kind: OperationKind::CloseAlert,
        method: HttpMethod::Post,
        path: "/v2/alerts/{identifier}/close",
        name: "close_alert",
    },
    Route {
        kind: OperationKind::AddNote,
        method: HttpMethod::Post,
        path: "/v2/alerts/{identifier}/notes",
        name: "add_note",
    },
    Route {
        kind: OperationKind::AddTags,
        method: HttpMethod::Post,
        path: "/v2/alerts/{identifier}/tags",
        name: "add_tags",
    },
    Route {
        kind: OperationKind::RemoveTags,
        method: HttpMethod::Delete,
        path: "/v2/alerts/{identifier}/tags",
        name: "remove_tags",
    },
    Route {
        kind: OperationKind::ListSchedules,
        method: HttpMethod::Get,
        path: "/v2/schedules",
        name: "list_schedules",
    },
    Route {
        kind: OperationKind::GetOnCalls,
        method: HttpMethod::Get,
        path: "/v2/schedules/on-calls",
        name: "get_on_calls",
    },
];

impl OperationKind {
    /// Route table entry of this operation.
    pub fn route(self) -> &'static Route {
        &ROUTES[self as usize]
    }

    /// Stable operation name used in logs.
    pub fn name(self) -> &'static str {
        self.route().name
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One remote call with its typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    GetAccountInfo,
    CountAlerts { query: String },
    ListAlerts(ListAlertsParams),
    GetAlert(AlertRef),
    ListNotes { alert: AlertRef, params: NotesParams },
    AcknowledgeAlert { alert: AlertRef, body: ActionPayload },
    UnAcknowledgeAlert { alert: AlertRef, body: ActionPayload },
    CloseAlert { alert: AlertRef, body: ActionPayload },
    AddNote { alert: AlertRef, body: ActionPayload },
    AddTags { alert: AlertRef, body: TagPayload },
    RemoveTags(RemoveTagsParams),
    ListSchedules,
    GetOnCalls(OnCallQuery),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::GetAccountInfo => OperationKind::GetAccountInfo,
            Self::CountAlerts { .. } => OperationKind::CountAlerts,
            Self::ListAlerts(_) => OperationKind::ListAlerts,
            Self::GetAlert(_) => OperationKind::GetAlert,
            Self::ListNotes { .. } => OperationKind::ListNotes,
            Self::AcknowledgeAlert { .. } => OperationKind::AcknowledgeAlert,
            Self::UnAcknowledgeAlert { .. } => OperationKind::UnAcknowledgeAlert,
            Self::CloseAlert { .. } => OperationKind::CloseAlert,
            Self::AddNote { .. } => OperationKind::AddNote,
            Self::AddTags { .. } => OperationKind::AddTags,
            Self::RemoveTags(_) => OperationKind::RemoveTags,
            Self::ListSchedules => OperationKind::ListSchedules,
            Self::GetOnCalls(_) => OperationKind::GetOnCalls,
        }
    }

    pub fn route(&self) -> &'static Route {
        self.kind().route()
    }

    fn alert(&self) -> Option<&AlertRef> {
        match self {
            Self::GetAlert(alert)
            | Self::ListNotes { alert, .. }
            | Self::AcknowledgeAlert { alert, .. }
            | Self::UnAcknowledgeAlert { alert, .. }
            | Self::CloseAlert { alert, .. }
            | Self::AddNote { alert, .. }
            | Self::AddTags { alert, .. } => Some(alert),
            _ => None,
        }
    }

    /// Identifier substituted into the path, if the route has one.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::RemoveTags(params) => Some(params.identifier.as_str()),
            _ => self.alert().map(|a| a.identifier.as_str()),
        }
    }

    /// Path segments with the identifier substituted (unencoded).
    pub fn path_segments(&self) -> Vec<String> {
        let identifier = self.identifier().unwrap_or_default();
        self.route()
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s == IDENTIFIER_SEGMENT {
                    identifier.to_string()
                } else {
                    s.to_string()
                }
            })
            .collect()
    }

    /// Request path with the identifier substituted (unencoded).
    pub fn path(&self) -> String {
        format!("/{}", self.path_segments().join("/"))
    }

    /// Query string pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = match self {
            Self::CountAlerts { query } => vec![("query".to_string(), query.clone())],
            Self::ListAlerts(params) => params.query_pairs(),
            Self::ListNotes { params, .. } => params.query_pairs(),
            Self::RemoveTags(params) => params.query_pairs(),
            Self::GetOnCalls(query) => query.query_pairs(),
            _ => Vec::new(),
        };
        if let Some(alert) = self.alert() {
            pairs.push((
                "identifierType".to_string(),
                alert.identifier_type.as_str().to_string(),
            ));
        }
        pairs
    }

    /// JSON body, for routes that take one.
    pub fn body(&self) -> serde_json::Result<Option<Value>> {
        match self {
            Self::AcknowledgeAlert { body, .. }
            | Self::UnAcknowledgeAlert { body, .. }
            | Self::CloseAlert { body, .. }
            | Self::AddNote { body, .. } => serde_json::to_value(body).map(Some),
            Self::AddTags { body, .. } => serde_json::to_value(body).map(Some),
            _ => Ok(None),
        }
    }

    /// Parameters rendered as one JSON object for the activity log.
    pub fn describe(&self) -> String {
        let mut map = Map::new();
        if let Some(identifier) = self.identifier() {
            map.insert("identifier".to_string(), Value::from(identifier));
        }
        for (key, value) in self.query_pairs() {
            map.insert(key, Value::from(value));
        }
        if let Ok(Some(body)) = self.body() {
            map.insert("body".to_string(), body);
        }
        Value::Object(map).to_string()
    }
}
