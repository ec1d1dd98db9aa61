use serde::{Deserialize, Serialize};

/// Outer response wrapper produced by the gateway/function layer. The `body`
/// field is itself a JSON-encoded string and must be parsed a second time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    #[serde(default)]
    pub body: Option<String>,
}

/// Decoded inner object, one item shape per endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload<T> {
    pub data: Vec<T>,
}

impl<T> Default for Payload<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: String,
    pub title: String,
    pub char_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub char_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub video_id: String,
    pub video_title: String,
    pub total_views: u64,
    pub views_last_30_days: u64,
}
