//! Alert commands.
//!
//! Responsibilities:
//! - List one page of alerts for a named filter, optionally with the total count
//! - Show one alert and its notes
//! - Acknowledge, un-acknowledge, close, annotate, and tag alerts
//!
//! Does NOT handle:
//! - Filter resolution and paging arithmetic (see `tygenie_client::QueryState`)
//! - Direct REST API calls (handled by client crate)
//!
//! Invariants:
//! - Pages are 1-based; page `n` starts at offset `(n - 1) * limit`, saturating
//! - The count and list calls of `list --with-count` run concurrently

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tygenie_client::{
    Alert, AlertRef, ClientManager, IdentifierType, ListAlertsParams, NotesParams, ParamOverrides,
};

use crate::cancellation::CancellationToken;
use crate::output::print_json;

/// How an alert identifier on the command line is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IdType {
    /// Alert id (UUID)
    #[default]
    Id,
    /// Short numeric id shown in the Opsgenie UI
    Tiny,
    /// Alert alias
    Alias,
}

impl From<IdType> for IdentifierType {
    fn from(value: IdType) -> Self {
        match value {
            IdType::Id => IdentifierType::Id,
            IdType::Tiny => IdentifierType::Tiny,
            IdType::Alias => IdentifierType::Alias,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct AlertTarget {
    /// Alert identifier
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// How the identifier is interpreted
    #[arg(long, value_enum, default_value_t = IdType::Id)]
    pub id_type: IdType,
}

impl AlertTarget {
    fn alert_ref(&self) -> AlertRef {
        AlertRef {
            identifier: self.identifier.clone(),
            identifier_type: self.id_type.into(),
        }
    }
}

#[derive(Subcommand)]
pub enum AlertsCommand {
    /// List one page of alerts
    List {
        /// Named filter from the settings file (defaults to the configured default filter)
        #[arg(short, long)]
        filter: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// Page size (defaults to the configured alert limit)
        #[arg(short, long)]
        limit: Option<u32>,

        /// Raw Opsgenie search query, overriding the filter
        #[arg(short, long)]
        query: Option<String>,

        /// Also fetch the total number of matching alerts
        #[arg(long)]
        with_count: bool,
    },
    /// Count alerts matching a filter
    Count {
        /// Named filter from the settings file
        #[arg(short, long)]
        filter: Option<String>,

        /// Raw Opsgenie search query, overriding the filter
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one alert with its details
    Get {
        #[command(flatten)]
        target: AlertTarget,
    },
    /// List the notes of an alert
    Notes {
        #[command(flatten)]
        target: AlertTarget,

        /// Maximum number of notes
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Acknowledge an alert
    Ack {
        #[command(flatten)]
        target: AlertTarget,

        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// Revert the acknowledgement of an alert
    Unack {
        #[command(flatten)]
        target: AlertTarget,

        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// Close an alert
    Close {
        #[command(flatten)]
        target: AlertTarget,

        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// Add a note to an alert
    Note {
        #[command(flatten)]
        target: AlertTarget,

        #[arg(short, long)]
        note: String,
    },
    /// Add tags to an alert
    Tag {
        #[command(flatten)]
        target: AlertTarget,

        /// Tag to add (repeatable)
        #[arg(short, long = "tag", required = true)]
        tags: Vec<String>,

        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// Remove tags from an alert
    Untag {
        /// Alert id
        #[arg(value_name = "ID")]
        identifier: String,

        /// Tag to remove (repeatable)
        #[arg(short, long = "tag", required = true)]
        tags: Vec<String>,

        #[arg(short, long, default_value = "")]
        note: String,
    },
}

/// One page of alerts as printed by `alerts list`.
#[derive(Debug, Serialize)]
struct AlertPage<'a> {
    page: u64,
    offset: u64,
    limit: u32,
    filter: Option<&'a str>,
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u64>,
    alerts: &'a [Alert],
}

pub async fn run(
    manager: ClientManager,
    command: AlertsCommand,
    pretty: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        AlertsCommand::List {
            filter,
            page,
            limit,
            query,
            with_count,
        } => run_list(&manager, filter, page, limit, query, with_count, pretty, cancel).await,
        AlertsCommand::Count { filter, query } => {
            let query = match query {
                Some(query) => query,
                None => manager.query_state().resolve_filter(filter.as_deref()),
            };
            info!("Counting alerts (query: {:?})", query);
            let api = manager.api();
            let resp = cancel.until_cancelled(api.count_alerts(&query)).await??;
            print_json(&resp.data, pretty)
        }
        AlertsCommand::Get { target } => {
            let api = manager.api();
            let resp = cancel
                .until_cancelled(api.get_alert(&target.alert_ref()))
                .await??;
            print_json(&resp.data, pretty)
        }
        AlertsCommand::Notes { target, limit } => {
            let api = manager.api();
            let params = NotesParams {
                limit,
                ..Default::default()
            };
            let resp = cancel
                .until_cancelled(api.get_alert_notes(&target.alert_ref(), params))
                .await??;
            print_json(&resp.data, pretty)
        }
        AlertsCommand::Ack { target, note } => {
            let api = manager.api();
            let resp = cancel
                .until_cancelled(api.ack_alert(&target.alert_ref(), &note))
                .await??;
            print_json(&resp, pretty)
        }
        AlertsCommand::Unack { target, note } => {
            let api = manager.api();
            let resp = cancel
                .until_cancelled(api.unack_alert(&target.alert_ref(), &note))
                .await??;
            print_json(&resp, pretty)
        }
        AlertsCommand::Close { target, note } => {
            let api = manager.api();
            let resp = cancel
                .until_cancelled(api.close_alert(&target.alert_ref(), &note))
                .await??;
            print_json(&resp, pretty)
        }
        AlertsCommand::Note { target, note } => {
            let api = manager.api();
            let resp = cancel
                .until_cancelled(api.add_note(&target.alert_ref(), &note))
                .await??;
            print_json(&resp, pretty)
        }
        AlertsCommand::Tag { target, tags, note } => {
            let api = manager.api();
            let resp = cancel
                .until_cancelled(api.tag_alert(&target.alert_ref(), &tags, &note))
                .await??;
            print_json(&resp, pretty)
        }
        AlertsCommand::Untag {
            identifier,
            tags,
            note,
        } => {
            let api = manager.api();
            let resp = cancel
                .until_cancelled(api.remove_tag_alert(&identifier, &tags, &note))
                .await??;
            print_json(&resp, pretty)
        }
    }
}

/// Parameters for `page` of `filter`.
///
/// The offset is computed once from the page number so the cost of a request
/// does not grow with the page requested.
fn page_params(
    manager: &ClientManager,
    filter: Option<&str>,
    page: u64,
    limit: Option<u32>,
    query: Option<String>,
) -> (ListAlertsParams, Option<String>) {
    let mut state = manager.query_state();
    let limit = match limit {
        Some(limit) => state.set_limit(limit),
        None => state.limit(),
    };

    let mut overrides = ParamOverrides::new()
        .with_limit(limit)
        .with_offset(page.saturating_sub(1).saturating_mul(u64::from(limit)));
    if let Some(query) = query {
        overrides = overrides.with_query(query);
    }

    let params = state.get(filter, overrides);
    (params, state.current_filter().map(str::to_string))
}

#[allow(clippy::too_many_arguments)]
async fn run_list(
    manager: &ClientManager,
    filter: Option<String>,
    page: u64,
    limit: Option<u32>,
    query: Option<String>,
    with_count: bool,
    pretty: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let (params, filter) = page_params(manager, filter.as_deref(), page, limit, query);
    info!(
        "Listing alerts (page: {}, offset: {}, limit: {})",
        page, params.offset, params.limit
    );

    let api = manager.api();
    let (count, alerts) = if with_count {
        let (count, alerts) = cancel
            .until_cancelled(futures::future::join(
                api.count_alerts(&params.query),
                api.list_alerts(&params),
            ))
            .await?;
        (Some(count?.data.count), alerts?)
    } else {
        let alerts = cancel.until_cancelled(api.list_alerts(&params)).await??;
        (None, alerts)
    };

    print_json(
        &AlertPage {
            page,
            offset: params.offset,
            limit: params.limit,
            filter: filter.as_deref(),
            query: &params.query,
            count,
            alerts: &alerts.data,
        },
        pretty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tygenie_config::{FilterDefinition, Settings};

    fn manager(limit: Option<i64>) -> ClientManager {
        let mut settings = Settings::default();
        settings.tygenie.alerts.limit = limit;
        settings
            .tygenie
            .filters
            .insert("open".to_string(), FilterDefinition::new("status:open"));
        ClientManager::new(Arc::new(settings)).unwrap()
    }

    #[test]
    fn test_first_page() {
        let (params, filter) = page_params(&manager(Some(10)), Some("open"), 1, None, None);
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, 10);
        assert_eq!(params.query, "status:open");
        assert_eq!(filter.as_deref(), Some("open"));
    }

    #[test]
    fn test_later_page_keeps_filter() {
        let (params, _) = page_params(&manager(Some(10)), Some("open"), 3, None, None);
        assert_eq!(params.offset, 20);
        assert_eq!(params.query, "status:open");
    }

    #[test]
    fn test_explicit_limit_sets_offset() {
        let (params, _) = page_params(&manager(Some(10)), None, 3, Some(5), None);
        assert_eq!(params.limit, 5);
        assert_eq!(params.offset, 10);
    }

    #[test]
    fn test_query_overrides_filter() {
        let (params, _) =
            page_params(&manager(None), Some("open"), 1, None, Some("tag:db".to_string()));
        assert_eq!(params.query, "tag:db");
        assert_eq!(params.limit, 22);
    }

    #[test]
    fn test_deep_page_is_computed_without_paging_steps() {
        let dir = tempfile::TempDir::new().unwrap();
        let log_file = dir.path().join("activity.log");

        let mut settings = Settings::default();
        settings.tygenie.log.enable = true;
        settings.tygenie.log.file = log_file.clone();
        let manager = ClientManager::new(Arc::new(settings)).unwrap();

        let (params, _) = page_params(&manager, None, 5001, None, None);
        assert_eq!(params.offset, 110_000);
        assert_eq!(params.limit, 22);

        let log = std::fs::read_to_string(&log_file).unwrap_or_default();
        assert!(!log.contains("page requested"), "unexpected paging lines: {log}");
    }

    #[test]
    fn test_last_page_number_saturates_offset() {
        let (params, _) = page_params(&manager(Some(10)), None, u64::MAX, None, None);
        assert_eq!(params.offset, u64::MAX);
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_id_type_maps_to_identifier_type() {
        assert_eq!(IdentifierType::from(IdType::Tiny), IdentifierType::Tiny);
        assert_eq!(IdentifierType::from(IdType::default()), IdentifierType::Id);
    }
}
