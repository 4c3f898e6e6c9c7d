//! Schedule and on-call models.
//!
//! Opsgenie schedule API endpoints:
//! - /v2/schedules
//! - /v2/schedules/on-calls

use serde::{Deserialize, Serialize};

/// Team owning a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

/// An on-call schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub timezone: String,
    pub enabled: bool,
    pub owner_team: Option<TeamRef>,
}

/// Response of `GET /v2/schedules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListSchedulesResponse {
    pub data: Vec<Schedule>,
    pub took: f64,
    pub request_id: String,
}

/// Schedule an on-call entry belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRef {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}

/// One participant currently on call (non-flat responses).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OnCallParticipant {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Who is on call for one schedule.
///
/// With `flat=true` Opsgenie fills `on_call_recipients` with user names;
/// otherwise `on_call_participants` carries the structured entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnCall {
    #[serde(rename = "_parent")]
    pub parent: ScheduleRef,
    pub on_call_participants: Vec<OnCallParticipant>,
    pub on_call_recipients: Vec<String>,
}

impl OnCall {
    /// Names of everyone on call, whichever response shape was returned.
    pub fn names(&self) -> Vec<&str> {
        if self.on_call_recipients.is_empty() {
            self.on_call_participants
                .iter()
                .map(|p| p.name.as_str())
                .collect()
        } else {
            self.on_call_recipients.iter().map(String::as_str).collect()
        }
    }
}

/// Response of `GET /v2/schedules/on-calls`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetOnCallsResponse {
    pub data: Vec<OnCall>,
    pub took: f64,
    pub request_id: String,
}
