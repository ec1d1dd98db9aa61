use crate::client::Endpoint;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html};

/// Render the dashboard. The three fetches run concurrently and are joined
/// before any rendering; each feeds its own section, and a failed fetch shows
/// up as an empty section rather than an error page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let (channels, videos, stats) = tokio::join!(
        state.client.fetch_payload(Endpoint::Channels),
        state.client.fetch_payload(Endpoint::Videos),
        state.client.fetch_payload(Endpoint::Stats),
    );

    Html(render_index(&channels.data, &videos.data, &stats.data))
}
