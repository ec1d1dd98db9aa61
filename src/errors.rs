use thiserror::Error;

/// Everything that can go wrong between issuing a GET and holding a usable
/// payload. All variants are absorbed at the fetch boundary; callers of
/// `ApiClient::fetch_payload` never see them.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream returned HTTP {status}")]
    Http { status: reqwest::StatusCode },

    #[error("upstream function error: {status} - {body}")]
    Upstream { status: i64, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}
