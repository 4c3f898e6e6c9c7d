//! Alert models for the Opsgenie alert API.
//!
//! This module contains types for listing, counting, and inspecting alerts
//! and their notes.
//!
//! # What this module handles:
//! - Deserialization of alert data from the Opsgenie REST API
//! - Addressing an alert by id, tiny id, or alias
//!
//! # What this module does NOT handle:
//! - Direct HTTP API calls (see [`crate::client`])
//! - Query and pagination state (see [`crate::query`])
//!
//! Opsgenie alert API endpoints:
//! - /v2/alerts
//! - /v2/alerts/count
//! - /v2/alerts/{identifier}
//! - /v2/alerts/{identifier}/notes

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::Paging;

/// How an alert identifier should be interpreted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    #[default]
    Id,
    Tiny,
    Alias,
}

impl IdentifierType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Tiny => "tiny",
            Self::Alias => "alias",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a single alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRef {
    pub identifier: String,
    pub identifier_type: IdentifierType,
}

impl AlertRef {
    /// Reference by alert id.
    pub fn id(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            identifier_type: IdentifierType::Id,
        }
    }

    /// Reference by tiny id (the short number shown in the UI).
    pub fn tiny(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            identifier_type: IdentifierType::Tiny,
        }
    }

    /// Reference by alias.
    pub fn alias(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            identifier_type: IdentifierType::Alias,
        }
    }
}

/// Alert priority, P1 (critical) to P5 (informational).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    #[default]
    P3,
    P4,
    P5,
    /// Unknown or unrecognized priority.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Team, user, or schedule an alert is routed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Responder {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Integration that created the alert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Integration {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Acknowledge/close bookkeeping attached to an alert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertReport {
    pub ack_time: Option<u64>,
    pub close_time: Option<u64>,
    pub acknowledged_by: Option<String>,
    pub closed_by: Option<String>,
}

/// An Opsgenie alert.
///
/// List responses omit `description` and `details`; they are only filled by
/// `get_alert`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub tiny_id: String,
    pub alias: String,
    pub message: String,
    /// `open` or `closed`.
    pub status: String,
    pub acknowledged: bool,
    pub is_seen: bool,
    pub tags: Vec<String>,
    pub snoozed: bool,
    pub snoozed_until: Option<DateTime<Utc>>,
    pub count: u64,
    pub last_occurred_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub source: String,
    pub owner: String,
    pub priority: Priority,
    pub responders: Vec<Responder>,
    pub integration: Option<Integration>,
    pub report: Option<AlertReport>,
    pub owner_team_id: Option<String>,
    pub entity: Option<String>,
    pub description: Option<String>,
    pub actions: Vec<String>,
    pub details: BTreeMap<String, String>,
}

/// Response of `GET /v2/alerts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListAlertsResponse {
    pub data: Vec<Alert>,
    pub paging: Option<Paging>,
    pub took: f64,
    pub request_id: String,
}

/// Response of `GET /v2/alerts/{identifier}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetAlertResponse {
    pub data: Alert,
    pub took: f64,
    pub request_id: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertCount {
    pub count: u64,
}

/// Response of `GET /v2/alerts/count`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountAlertsResponse {
    pub data: AlertCount,
    pub took: f64,
    pub request_id: String,
}

/// A note attached to an alert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertNote {
    pub note: String,
    pub owner: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Cursor to pass back as `offset` for the next page of notes.
    pub offset: String,
}

/// Response of `GET /v2/alerts/{identifier}/notes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListNotesResponse {
    pub data: Vec<AlertNote>,
    pub paging: Option<Paging>,
    pub took: f64,
    pub request_id: String,
}
