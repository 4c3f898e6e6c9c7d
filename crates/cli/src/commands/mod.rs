//! CLI command implementations.

pub mod account;
pub mod alerts;
pub mod config;
pub mod filters;
pub mod schedules;
