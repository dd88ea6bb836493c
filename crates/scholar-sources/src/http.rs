//! Shared reqwest plumbing for the upstream adapters.

use reqwest::{Client, Response, StatusCode};
use scholar_core::errors::{ScholarError, ScholarResult, SourceError};
use serde::de::DeserializeOwned;

/// Build the HTTP client shared by both adapters.
pub fn build_client(user_agent: &str) -> ScholarResult<Client> {
    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .build()
        .map_err(|e| ScholarError::ConfigError(format!("cannot build HTTP client: {e}")))
}

/// Map a transport error onto the gateway's error taxonomy.
pub fn transport_error(upstream: &str, err: reqwest::Error) -> SourceError {
    if err.is_decode() {
        SourceError::Parse {
            upstream: upstream.to_string(),
            reason: err.to_string(),
        }
    } else {
        SourceError::Network {
            upstream: upstream.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Reject non-success statuses. 429 is reported as rate limiting.
pub fn check_status(upstream: &str, response: &Response) -> Result<(), SourceError> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(SourceError::RateLimited {
            upstream: upstream.to_string(),
        });
    }
    if !status.is_success() {
        return Err(SourceError::HttpStatus {
            upstream: upstream.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(())
}

/// Read the body and deserialize it, keeping parse and transport failures apart.
pub async fn read_json<T: DeserializeOwned>(
    upstream: &str,
    response: Response,
) -> Result<T, SourceError> {
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(upstream, e))?;
    parse_json(upstream, &body)
}

pub fn parse_json<T: DeserializeOwned>(upstream: &str, body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Parse {
        upstream: upstream.to_string(),
        reason: e.to_string(),
    })
}
