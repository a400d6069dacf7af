//! SQS queue URL decomposition
//!
//! Expected shape: `[http://|https://]sqs.<region>.amazonaws.com/<accountId>/<queueName>`.
//! Parsing is best-effort; anything that does not fit yields `None`.

use serde::Serialize;
use tracing::trace;

use crate::validate::{is_account_id, is_valid_queue_name};

const HTTP_SCHEMA: &str = "http://";
const HTTPS_SCHEMA: &str = "https://";

/// Components recovered from a queue URL
///
/// `queue_name` and `account_id` are always both present or both absent.
/// `region` may be absent on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    queue_name: Option<String>,
    account_id: Option<String>,
    region: Option<String>,
}

impl ParsedUrl {
    pub fn queue_name(&self) -> Option<&str> {
        self.queue_name.as_deref()
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// True when nothing was recovered
    pub fn is_empty(&self) -> bool {
        self.queue_name.is_none() && self.account_id.is_none() && self.region.is_none()
    }
}

/// Extract the queue name from a URL believed to be an SQS queue URL
///
/// Handles new, legacy and some custom URL forms. The URL must have exactly
/// three `/`-separated parts once the scheme is removed, the second must look
/// like an account ID, and the third must be a valid queue name. Unlike
/// [`parse_url`], the host is not checked.
pub fn get_queue_name(url: Option<&str>) -> Option<String> {
    let url = url?;
    let stripped = strip_schema(url);
    let segments = split_segments(&stripped, '/');

    if segments.len() != 3 {
        trace!(url = %url, segments = segments.len(), "No queue name: wrong segment count");
        return None;
    }
    if !is_account_id(Some(segments[1])) {
        trace!(url = %url, account_id = %segments[1], "No queue name: not an account id");
        return None;
    }
    if !is_valid_queue_name(Some(segments[2])) {
        trace!(url = %url, queue_name = %segments[2], "No queue name: invalid queue name");
        return None;
    }

    Some(segments[2].to_string())
}

/// Extract the account ID from an SQS queue URL
pub fn get_account_id(url: Option<&str>) -> Option<String> {
    parse_url(url).account_id
}

/// Extract the region from an SQS queue URL
pub fn get_region(url: Option<&str>) -> Option<String> {
    parse_url(url).region
}

/// Parse an SQS queue URL into its components
///
/// On top of the checks done by [`get_queue_name`], the host must start with
/// `sqs` (case-insensitive). The region is the second host label, and only
/// when the host has exactly four labels.
pub fn parse_url(url: Option<&str>) -> ParsedUrl {
    let Some(url) = url else {
        return ParsedUrl::default();
    };

    let stripped = strip_schema(url);
    let segments = split_segments(&stripped, '/');

    if segments.len() != 3 {
        trace!(url = %url, segments = segments.len(), "Rejected: wrong segment count");
        return ParsedUrl::default();
    }

    let (host, account_id, queue_name) = (segments[0], segments[1], segments[2]);

    if !is_account_id(Some(account_id)) {
        trace!(url = %url, account_id = %account_id, "Rejected: not an account id");
        return ParsedUrl::default();
    }
    if !is_valid_queue_name(Some(queue_name)) {
        trace!(url = %url, queue_name = %queue_name, "Rejected: invalid queue name");
        return ParsedUrl::default();
    }
    if !host.to_lowercase().starts_with("sqs") {
        trace!(url = %url, host = %host, "Rejected: host is not an sqs endpoint");
        return ParsedUrl::default();
    }

    let labels = split_segments(host, '.');
    let region = if labels.len() == 4 {
        Some(labels[1].to_string())
    } else {
        trace!(host = %host, labels = labels.len(), "No region in host");
        None
    };

    ParsedUrl {
        queue_name: Some(queue_name.to_string()),
        account_id: Some(account_id.to_string()),
        region,
    }
}

/// Remove every occurrence of the two schemes, not just a leading one
fn strip_schema(url: &str) -> String {
    url.replace(HTTP_SCHEMA, "").replace(HTTPS_SCHEMA, "")
}

/// Split on `sep`, dropping trailing empty pieces
fn split_segments(input: &str, sep: char) -> Vec<&str> {
    let mut parts: Vec<&str> = input.split(sep).collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}
