// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::models::registry::DEFAULT_EVENT;

/// Placeholder SheetDB endpoint; override with `--endpoint` or `EVENTFORM_ENDPOINT`.
pub const DEFAULT_ENDPOINT: &str = "https://sheetdb.io/api/v1/YOUR_API_KEY";

#[derive(Debug, Parser)]
#[command(name = "eventform")]
#[command(version)]
#[command(about = "Event registration form posting to a spreadsheet API", long_about = None)]
pub struct AppConfig {
    /// Event whose form is shown first (case-insensitive)
    #[arg(long, env = "EVENTFORM_EVENT", default_value = DEFAULT_EVENT, value_parser = parse_event_key)]
    pub event: String,

    /// Spreadsheet API endpoint receiving registrations
    #[arg(long, env = "EVENTFORM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Directory containing the logo files referenced by the forms
    #[arg(long, env = "EVENTFORM_ASSETS", default_value = "assets")]
    pub assets: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "EVENTFORM_LOG", default_value = "info")]
    pub log_level: String,

    /// Number of background submission workers
    #[arg(long, default_value_t = 2, value_parser = parse_workers)]
    pub workers: usize,
}

/// Event identifiers are matched in lowercase, like the URL segment they replace.
fn parse_event_key(raw: &str) -> Result<String, String> {
    Ok(raw.trim().to_ascii_lowercase())
}

fn parse_workers(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("at least one worker is required".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}
