use async_trait::async_trait;
use playtrace_types::GameType;
use serde::Deserialize;

use crate::error::Result;

/// One page of raw session records as a game service returns it.
///
/// Records stay as JSON here — decoding and normalization happen
/// per-record downstream so one malformed record cannot poison a page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHistoryPage {
    #[serde(default)]
    pub content: Vec<serde_json::Value>,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_elements: usize,
}

/// External collaborator serving persisted session history, one logical
/// endpoint per game type.
///
/// Retry/backoff policy is the implementor's concern, not this
/// subsystem's; a failed fetch surfaces as `Error::Source` and the
/// orchestration layer degrades that one game to zero-session defaults.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// `GET /{gameService}/subject/{id}/history?page={n}&size={m}`
    async fn fetch_history(
        &self,
        subject_id: &str,
        game: GameType,
        page: usize,
        size: usize,
    ) -> Result<RawHistoryPage>;
}
