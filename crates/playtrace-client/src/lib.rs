// Client layer - retrieval and orchestration over the game services
// Owns the I/O boundary: everything below (engine, extractors) is pure.

pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod source;

pub use config::{DEFAULT_PAGE_SIZE, EndpointConfig};
pub use error::{Error, Result};
pub use http::HttpSessionSource;
pub use service::AnalyticsClient;
pub use source::{RawHistoryPage, SessionSource};
