//! Rendering of parse results, one line per input URL

use serde::{Deserialize, Serialize};
use sqsurl_core::{ParsedUrl, SqsRemoteResource};
use std::str::FromStr;
use thiserror::Error;

/// Placeholder for absent values in text output
const ABSENT: &str = "-";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputError {
    #[error("Unknown output format: {0} (expected json or text)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(OutputError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Serialize)]
struct ParsedRecord<'a> {
    url: &'a str,
    #[serde(flatten)]
    parsed: &'a ParsedUrl,
}

/// Render the parsed components of `url`
pub fn render_parsed(
    url: &str,
    parsed: &ParsedUrl,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(&ParsedRecord { url, parsed }),
        OutputFormat::Text => Ok(format!(
            "queue_name={} account_id={} region={}",
            parsed.queue_name().unwrap_or(ABSENT),
            parsed.account_id().unwrap_or(ABSENT),
            parsed.region().unwrap_or(ABSENT),
        )),
    }
}

/// Render remote resource attributes for `url`
pub fn render_resource(
    resource: Option<&SqsRemoteResource>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(&resource),
        OutputFormat::Text => Ok(match resource {
            Some(resource) => resource
                .attributes()
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect::<Vec<_>>()
                .join(" "),
            None => ABSENT.to_string(),
        }),
    }
}
