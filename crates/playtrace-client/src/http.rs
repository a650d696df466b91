use async_trait::async_trait;
use playtrace_types::GameType;
use tracing::debug;

use crate::config::EndpointConfig;
use crate::error::{Error, Result};
use crate::source::{RawHistoryPage, SessionSource};

/// `SessionSource` over the real per-game HTTP services.
pub struct HttpSessionSource {
    http: reqwest::Client,
    config: EndpointConfig,
}

impl HttpSessionSource {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Use a preconfigured client (timeouts, proxies) instead of the
    /// default one.
    pub fn with_client(http: reqwest::Client, config: EndpointConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl SessionSource for HttpSessionSource {
    async fn fetch_history(
        &self,
        subject_id: &str,
        game: GameType,
        page: usize,
        size: usize,
    ) -> Result<RawHistoryPage> {
        let url = self.config.history_url(game, subject_id, page, size);
        debug!(url = %url, "fetching session history page");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Source {
                game,
                reason: format!("history endpoint returned {}", response.status()),
            });
        }
        Ok(response.json().await?)
    }
}
