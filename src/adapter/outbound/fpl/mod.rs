//! Fantasy Premier League upstream adapter.

pub mod client;
pub mod endpoint;
pub mod http;
pub mod settings;

pub use client::{api_root, LeagueDataClient};
pub use endpoint::Endpoint;
pub use http::HttpTransport;
pub use settings::{ApiConfig, CacheConfig, DEFAULT_BASE_URL};
