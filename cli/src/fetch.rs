//! Dataset download.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

const USER_AGENT: &str = concat!("baseline/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Network response was not ok: {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("Response from {url} is not valid JSON")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetches the web-features document. No timeout and no retries: a stalled
/// request stalls the run.
pub struct DatasetClient {
    http: reqwest::Client,
}

impl DatasetClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { http })
    }

    /// GET `url` and parse the body as JSON.
    pub async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })
    }
}
