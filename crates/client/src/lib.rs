//! Opsgenie REST API client.
//!
//! This crate is the query-and-dispatch layer of TyGenie: it decides which
//! alerts to fetch ([`QueryState`]), issues authenticated calls against the
//! Opsgenie REST API ([`ApiFacade`]), and turns every failure into an
//! [`Absence`] so a calling interface never crashes on a transport or API error.
//!
//! [`ClientManager`] owns the live façade and rebuilds it when credentials change.

mod activity;
pub mod client;
pub mod error;
mod manager;
pub mod models;
pub mod operation;
mod query;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use activity::ActivityLogger;
pub use client::ApiFacade;
pub use client::builder::ApiFacadeBuilder;
pub use error::{Absence, ApiResult, ClientError, Result};
pub use manager::ClientManager;
pub use models::{
    AccountInfo, AccountInfoResponse, Alert, AlertNote, AlertRef, CountAlertsResponse,
    GetAlertResponse, GetOnCallsResponse, IdentifierType, ListAlertsParams, ListAlertsResponse,
    ListNotesResponse, ListSchedulesResponse, NoteDirection, NotesParams, OnCall, OnCallParams,
    ParamOverrides, Priority, Schedule, SortOrder, SuccessResponse,
};
pub use operation::{Operation, OperationKind};
pub use query::QueryState;
