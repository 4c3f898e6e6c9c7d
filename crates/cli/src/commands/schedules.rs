//! Schedule and on-call commands.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tygenie_client::{ClientManager, OnCallParams};

use crate::cancellation::CancellationToken;
use crate::output::print_json;

/// Who is on call for one schedule, as printed by `oncall`.
#[derive(Debug, Serialize)]
struct OnCallEntry<'a> {
    schedule: &'a str,
    enabled: bool,
    on_call: Vec<&'a str>,
}

pub async fn run_schedules(
    manager: ClientManager,
    pretty: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let api = manager.api();
    let resp = cancel.until_cancelled(api.list_schedules()).await??;
    print_json(&resp.data, pretty)
}

pub async fn run_oncall(
    manager: ClientManager,
    date: Option<String>,
    no_flat: bool,
    pretty: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let params = OnCallParams {
        flat: no_flat.then_some(false),
        date: date.as_deref().map(parse_date).transpose()?,
    };

    let api = manager.api();
    let resp = cancel.until_cancelled(api.whois_on_call(params)).await??;

    let entries: Vec<OnCallEntry<'_>> = resp
        .data
        .iter()
        .map(|on_call| OnCallEntry {
            schedule: &on_call.parent.name,
            enabled: on_call.parent.enabled,
            on_call: on_call.names(),
        })
        .collect();
    print_json(&entries, pretty)
}

fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .with_context(|| format!("Invalid --date '{value}', expected RFC 3339"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_normalizes_to_utc() {
        let date = parse_date("2024-05-01T14:00:00+02:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("tomorrow").is_err());
    }
}
