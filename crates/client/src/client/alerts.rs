//! Alert-related API methods for [`ApiFacade`].
//!
//! # What this module handles:
//! - Counting, listing, and fetching alerts
//! - Listing alert notes
//! - Acknowledge, un-acknowledge, close, add-note, add-tags, remove-tags
//!
//! # What this module does NOT handle:
//! - Choosing which page or filter to request (see [`crate::query`])
//!
//! Mutating calls attach the façade's `username` and `source` so Opsgenie
//! can attribute the change.

use crate::client::ApiFacade;
use crate::error::ApiResult;
use crate::models::{
    ActionPayload, AlertRef, CountAlertsResponse, GetAlertResponse, ListAlertsParams,
    ListAlertsResponse, ListNotesResponse, NotesParams, RemoveTagsParams, SuccessResponse,
    TagPayload,
};
use crate::operation::Operation;

impl ApiFacade {
    /// Count alerts matching a search query.
    pub async fn count_alerts(&self, query: &str) -> ApiResult<CountAlertsResponse> {
        self.invoke(Operation::CountAlerts {
            query: query.to_string(),
        })
        .await
    }

    /// List one page of alerts.
    ///
    /// # Arguments
    /// * `params` - Page, sort, and query, usually produced by [`crate::QueryState`]
    pub async fn list_alerts(&self, params: &ListAlertsParams) -> ApiResult<ListAlertsResponse> {
        self.invoke(Operation::ListAlerts(params.clone())).await
    }

    /// Get one alert, including its details and description.
    pub async fn get_alert(&self, alert: &AlertRef) -> ApiResult<GetAlertResponse> {
        self.invoke(Operation::GetAlert(alert.clone())).await
    }

    /// List notes attached to an alert.
    pub async fn get_alert_notes(
        &self,
        alert: &AlertRef,
        params: NotesParams,
    ) -> ApiResult<ListNotesResponse> {
        self.invoke(Operation::ListNotes {
            alert: alert.clone(),
            params,
        })
        .await
    }

    /// Acknowledge an alert.
    pub async fn ack_alert(&self, alert: &AlertRef, note: &str) -> ApiResult<SuccessResponse> {
        self.invoke(Operation::AcknowledgeAlert {
            alert: alert.clone(),
            body: self.action_payload(note),
        })
        .await
    }

    /// Revert an acknowledgement.
    pub async fn unack_alert(&self, alert: &AlertRef, note: &str) -> ApiResult<SuccessResponse> {
        self.invoke(Operation::UnAcknowledgeAlert {
            alert: alert.clone(),
            body: self.action_payload(note),
        })
        .await
    }

    /// Close an alert.
    pub async fn close_alert(&self, alert: &AlertRef, note: &str) -> ApiResult<SuccessResponse> {
        self.invoke(Operation::CloseAlert {
            alert: alert.clone(),
            body: self.action_payload(note),
        })
        .await
    }

    /// Add a note to an alert.
    pub async fn add_note(&self, alert: &AlertRef, note: &str) -> ApiResult<SuccessResponse> {
        self.invoke(Operation::AddNote {
            alert: alert.clone(),
            body: self.action_payload(note),
        })
        .await
    }

    /// Add tags to an alert.
    pub async fn tag_alert(
        &self,
        alert: &AlertRef,
        tags: &[String],
        note: &str,
    ) -> ApiResult<SuccessResponse> {
        self.invoke(Operation::AddTags {
            alert: alert.clone(),
            body: TagPayload {
                user: self.username.clone(),
                source: self.source.clone(),
                note: note.to_string(),
                tags: tags.to_vec(),
            },
        })
        .await
    }

    /// Remove tags from an alert.
    ///
    /// The removal endpoint takes flat query parameters rather than a body,
    /// so `identifier` is always an alert id; no identifier type is sent.
    pub async fn remove_tag_alert(
        &self,
        identifier: &str,
        tags: &[String],
        note: &str,
    ) -> ApiResult<SuccessResponse> {
        self.invoke(Operation::RemoveTags(self.remove_tags_params(identifier, tags, note)))
            .await
    }

    pub(crate) fn action_payload(&self, note: &str) -> ActionPayload {
        ActionPayload {
            user: self.username.clone(),
            source: self.source.clone(),
            note: note.to_string(),
        }
    }

    pub(crate) fn remove_tags_params(
        &self,
        identifier: &str,
        tags: &[String],
        note: &str,
    ) -> RemoveTagsParams {
        RemoveTagsParams {
            identifier: identifier.to_string(),
            user: self.username.clone(),
            source: self.source.clone(),
            tags: tags.to_vec(),
            note: note.to_string(),
        }
    }
}
