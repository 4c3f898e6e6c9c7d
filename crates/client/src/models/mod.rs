//! Data models for Opsgenie API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod account;
pub mod alerts;
pub mod common;
pub mod params;
pub mod payloads;
pub mod schedules;

pub use account::{AccountInfo, AccountInfoResponse, AccountPlan};
pub use alerts::{
    Alert, AlertCount, AlertNote, AlertRef, AlertReport, CountAlertsResponse, GetAlertResponse,
    IdentifierType, Integration, ListAlertsResponse, ListNotesResponse, Priority, Responder,
};
pub use common::{ErrorBody, Paging, SuccessResponse};
pub use params::{
    ListAlertsParams, NoteDirection, NotesParams, OnCallParams, OnCallQuery, ParamOverrides,
    SortOrder,
};
pub use payloads::{ActionPayload, RemoveTagsParams, TagPayload};
pub use schedules::{
    GetOnCallsResponse, ListSchedulesResponse, OnCall, OnCallParticipant, Schedule, ScheduleRef,
    TeamRef,
};
