//! Governance API adapter using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::domain::{ApiConfig, AppError, Proposal};
use crate::ports::GovernanceApi;

const DEFAULT_STATUS_MESSAGE: &str = "Governance API request failed";

/// HTTP transport for the governance server.
///
/// Each call performs a single request. There are no retries; callers that
/// want another attempt issue another call.
#[derive(Debug, Clone)]
pub struct HttpGovernanceApi {
    base_url: Url,
    client: Client,
}

impl HttpGovernanceApi {
    /// Create a new HTTP client for the given server configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Api {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { base_url: config.base_url.clone(), client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url.join(path).map_err(|e| {
            AppError::configuration(format!("Invalid endpoint path '{}': {}", path, e))
        })
    }

    fn get_json(&self, path: &str) -> Result<Value, AppError> {
        let response =
            self.client.get(self.endpoint(path)?).send().map_err(|e| AppError::Api {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(status_error(&body_text, status.as_u16()));
        }

        serde_json::from_str(&body_text).map_err(|e| AppError::MalformedResponse {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(), AppError> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| AppError::Api {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        if status.is_success() {
            // Write response bodies carry nothing the client acts on.
            return Ok(());
        }

        let body_text = response.text().unwrap_or_default();
        Err(status_error(&body_text, status.as_u16()))
    }
}

#[derive(Debug, Serialize)]
struct CreateUniverseRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct ProposeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct VoteRequest<'a> {
    id: &'a str,
    vote: &'a str,
}

impl GovernanceApi for HttpGovernanceApi {
    fn fetch_universe(&self) -> Result<Value, AppError> {
        self.get_json("/universe")
    }

    fn fetch_proposals(&self) -> Result<Vec<Proposal>, AppError> {
        let value = self.get_json("/proposals")?;
        serde_json::from_value(value).map_err(|e| AppError::MalformedResponse {
            endpoint: "/proposals".to_string(),
            reason: e.to_string(),
        })
    }

    fn create_universe(&self, name: &str) -> Result<(), AppError> {
        self.post_json("/create_universe", &CreateUniverseRequest { name })
    }

    fn submit_proposal(&self, text: &str) -> Result<(), AppError> {
        self.post_json("/propose", &ProposeRequest { text })
    }

    fn submit_vote(&self, id: &str, vote: &str) -> Result<(), AppError> {
        self.post_json("/vote", &VoteRequest { id, vote })
    }
}

fn status_error(body: &str, status: u16) -> AppError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        if !body.trim().is_empty() {
            body.to_string()
        } else if status >= 500 {
            "Server error".to_string()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });

    AppError::Api { message, status: Some(status) }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}
