//! `filters`: the named alert filters of the settings file.

use anyhow::Result;
use serde::Serialize;
use tygenie_config::{SettingsProvider, SharedSettings};

use crate::output::print_json;

#[derive(Debug, Serialize)]
struct FilterEntry<'a> {
    name: &'a str,
    filter: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    default: bool,
}

pub fn run(settings: &SharedSettings, pretty: bool) -> Result<()> {
    let snapshot = settings.settings();
    let tygenie = &snapshot.tygenie;

    let entries: Vec<FilterEntry<'_>> = tygenie
        .filters
        .iter()
        .map(|(name, definition)| FilterEntry {
            name,
            filter: &definition.filter,
            description: definition.description.as_deref(),
            default: tygenie.default_filter.as_deref() == Some(name.as_str()),
        })
        .collect();

    if let Some(default) = tygenie.default_filter.as_deref() {
        if !tygenie.filters.contains_key(default) {
            tracing::warn!(filter = default, "Default filter is not defined");
        }
    }

    print_json(&entries, pretty)
}
