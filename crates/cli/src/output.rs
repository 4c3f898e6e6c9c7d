//! JSON output on stdout.
//!
//! Every command prints exactly one JSON document; diagnostics go to stderr.

use anyhow::{Context, Result};
use serde::Serialize;

/// Render `value` as compact or pretty JSON.
pub fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to serialize output")
}

/// Print `value` as one JSON document followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    println!("{}", render(value, pretty)?);
    Ok(())
}
