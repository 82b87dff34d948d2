//! Agent Client: the single point of entry for calls to the remote agent service.
//!
//! Every walker is invoked as `POST {base_url}/walker/{name}` with a JSON body.
//! Responses arrive wrapped in a `{"reports": [...]}` envelope; the envelope is
//! resolved here, once, into a `WalkerOutcome`. Nothing downstream inspects
//! raw response shapes.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod fallback;

pub const SKILL_GRAPH_WALKER: &str = "get_skill_graph";
pub const MENTOR_MATCH_WALKER: &str = "mentor_match_agent";
pub const SKILL_ANALYZER_WALKER: &str = "skill_analyzer_agent";

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Agent error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed walker response: {0}")]
    Malformed(String),
}

/// Result of a walker call after envelope resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkerOutcome<T> {
    Ok(Vec<T>),
    Empty,
    Error(String),
}

#[derive(Clone)]
pub struct AgentClient {
    client: Client,
    base_url: String,
}

impl AgentClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AgentError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn walker_url(&self, walker: &str) -> String {
        format!("{}/walker/{walker}", self.base_url)
    }

    /// Makes a raw walker call, returning the decoded JSON body.
    /// Retries on transport errors and 5xx with exponential backoff.
    pub async fn call(&self, walker: &str, payload: &Value) -> Result<Value, AgentError> {
        let url = self.walker_url(walker);
        let mut last_error: Option<AgentError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 250ms, 500ms
                let delay = Duration::from_millis(250 * (1 << (attempt - 1)));
                warn!(
                    "Walker {walker} attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&url).json(payload).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(AgentError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Walker {walker} returned {status}: {body}");
                last_error = Some(AgentError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AgentError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let body: Value = response.json().await?;
            debug!("Walker {walker} call succeeded");
            return Ok(body);
        }

        Err(last_error.unwrap_or_else(|| AgentError::Api {
            status: 503,
            message: format!("walker {walker} unavailable after {MAX_RETRIES} attempts"),
        }))
    }

    /// Calls a walker and resolves its envelope into a list of `T`.
    /// Transport and status failures become `WalkerOutcome::Error`.
    pub async fn call_walker<T: DeserializeOwned>(
        &self,
        walker: &str,
        payload: &Value,
    ) -> WalkerOutcome<T> {
        match self.call(walker, payload).await {
            Ok(body) => resolve_reports(body),
            Err(e) => WalkerOutcome::Error(e.to_string()),
        }
    }
}

/// Resolves a walker response body into a typed outcome.
///
/// Accepted shapes:
/// - `{"reports": [[...], ...]}` → first report, which must be a list
/// - `{"reports": [[[...]]]}`    → singly wrapped list, unwrapped once
/// - `[...]`                    → bare list
///
/// An object with no (or empty) `reports` is `Empty`. A report that is an empty
/// list is `Ok(vec![])`. Any other shape is `Error`.
pub fn resolve_reports<T: DeserializeOwned>(body: Value) -> WalkerOutcome<T> {
    let report = match body {
        Value::Object(mut map) => match map.remove("reports") {
            Some(Value::Array(reports)) => match reports.into_iter().next() {
                Some(first) => first,
                None => return WalkerOutcome::Empty,
            },
            None => return WalkerOutcome::Empty,
            Some(other) => {
                return malformed(format!("`reports` is not a list: {other}"));
            }
        },
        list @ Value::Array(_) => list,
        other => return malformed(format!("unexpected body: {other}")),
    };

    let items = match report {
        Value::Array(items) => unwrap_single_nesting(items),
        other => return malformed(format!("report is not a list: {other}")),
    };

    match items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
    {
        Ok(parsed) => WalkerOutcome::Ok(parsed),
        Err(e) => WalkerOutcome::Error(AgentError::Parse(e).to_string()),
    }
}

fn unwrap_single_nesting(items: Vec<Value>) -> Vec<Value> {
    match items.first() {
        Some(Value::Array(_)) => match items.into_iter().next() {
            Some(Value::Array(inner)) => inner,
            _ => Vec::new(),
        },
        _ => items,
    }
}

fn malformed<T>(reason: String) -> WalkerOutcome<T> {
    WalkerOutcome::Error(AgentError::Malformed(reason).to_string())
}
