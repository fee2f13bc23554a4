// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Registration payload construction and delivery to the spreadsheet API.
//!
//! Responsibilities:
//! - Flatten field values into one spreadsheet row keyed by field name.
//! - Wrap the row in the `{"data": [row]}` batch the API expects.
//! - POST it once; any non-2xx status or transport error counts as failure.

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value, json};

use crate::models::form::FormConfig;
use crate::models::values::FieldValues;

/// Column holding the event identifier.
const EVENT_COLUMN: &str = "event";
/// Column holding the selected dialing prefix.
const COUNTRY_CODE_COLUMN: &str = "countryCode";

/// Destination for registration batches.
pub trait Endpoint: Send + Sync {
    /// Deliver one batch. `Ok` only when the remote side accepted it.
    fn submit(&self, body: &Value) -> Result<()>;
}

/// Build the spreadsheet row for the current values.
///
/// Every field of `config` is copied verbatim and `event` is added. When the
/// form has a phone field, its value is prefixed with the country code and the
/// code is also kept as its own column.
pub fn build_record(event_key: &str, config: &FormConfig, values: &FieldValues) -> Map<String, Value> {
    let mut record: Map<String, Value> = config
        .fields
        .iter()
        .map(|f| (f.name.clone(), Value::String(values.get(&f.name).to_string())))
        .collect();

    if let Some(phone) = config.phone_field() {
        let number = format!("{}{}", values.country_code(), values.get(&phone.name));
        record.insert(phone.name.clone(), Value::String(number));
        record.insert(
            COUNTRY_CODE_COLUMN.to_string(),
            Value::String(values.country_code().to_string()),
        );
    }

    record.insert(EVENT_COLUMN.to_string(), Value::String(event_key.to_string()));
    record
}

/// Wrap a single row in the one-element batch accepted by the API.
pub fn batch(record: Map<String, Value>) -> Value {
    json!({ "data": [record] })
}

/// Blocking HTTP client for a SheetDB-style endpoint.
pub struct SheetDbEndpoint {
    client: reqwest::blocking::Client,
    url: url::Url,
}

impl SheetDbEndpoint {
    pub fn new(url: &str) -> Result<Self> {
        let url = url::Url::parse(url).with_context(|| format!("Invalid endpoint URL: {url}"))?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            // Single attempt that runs to completion.
            .timeout(None::<std::time::Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, url })
    }
}

impl Endpoint for SheetDbEndpoint {
    fn submit(&self, body: &Value) -> Result<()> {
        let response = self
            .client
            .post(self.url.clone())
            .json(body)
            .send()
            .with_context(|| format!("Failed to reach {}", self.url))?;

        let status = response.status();
        let text = response.text().unwrap_or_default();
        tracing::debug!(%status, response = %text, "submission endpoint replied");

        if !status.is_success() {
            bail!("Endpoint rejected submission with status {status}: {text}");
        }
        Ok(())
    }
}
