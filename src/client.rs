use crate::errors::FetchError;
use crate::models::{Envelope, Payload};
use serde::de::DeserializeOwned;
use std::{env, time::Duration};
use tracing::error;

/// Production API Gateway stage serving the dashboard data.
pub const DEFAULT_API_ENDPOINT: &str =
    "https://4ge666g877.execute-api.ap-southeast-2.amazonaws.com/prod";

// The upstream is a Lambda behind a gateway; cold starts are slow but a stuck
// connection must not hang the page forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Channels,
    Videos,
    Stats,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Channels => "channels",
            Endpoint::Videos => "videos",
            Endpoint::Stats => "stats",
        }
    }
}

pub fn resolve_api_endpoint() -> String {
    env::var("API_ENDPOINT").unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string())
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch one endpoint's payload. Any failure is logged and collapsed into
    /// an empty payload, so the caller always has an iterable `data`.
    pub async fn fetch_payload<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Payload<T> {
        match self.try_fetch(endpoint).await {
            Ok(payload) => payload,
            Err(err) => {
                error!("[{}] fetch error: {err}", endpoint.as_str());
                Payload::default()
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<Payload<T>, FetchError> {
        let url = format!("{}/api/{}", self.base_url, endpoint.as_str());
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        // The function layer serializes its result before the gateway wraps
        // it, so the body holds JSON-in-JSON: parse the envelope, then parse
        // the envelope's body.
        let text = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&text)?;

        match envelope.body {
            Some(body) if envelope.status_code == 200 => Ok(serde_json::from_str(&body)?),
            body => Err(FetchError::Upstream {
                status: envelope.status_code,
                body: body.unwrap_or_else(|| "no response body".to_string()),
            }),
        }
    }
}
