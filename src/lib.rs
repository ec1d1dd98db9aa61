pub mod app;
pub mod client;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::{resolve_api_endpoint, ApiClient, Endpoint};
pub use state::AppState;
