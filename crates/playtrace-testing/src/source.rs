use async_trait::async_trait;
use playtrace_client::{Error, RawHistoryPage, Result, SessionSource};
use playtrace_types::GameType;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// In-memory `SessionSource` mirroring the services' paging contract:
/// newest-first by `dateTime`, ties by `sessionId` descending. Build it
/// up-front, then share it behind an `Arc`.
#[derive(Default)]
pub struct InMemorySource {
    records: HashMap<(String, GameType), Vec<Value>>,
    failing: HashSet<GameType>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subject_id: &str, game: GameType, record: Value) {
        self.records
            .entry((subject_id.to_string(), game))
            .or_default()
            .push(record);
    }

    /// Every fetch for this game fails, simulating a service outage.
    pub fn fail_game(&mut self, game: GameType) {
        self.failing.insert(game);
    }
}

#[async_trait]
impl SessionSource for InMemorySource {
    async fn fetch_history(
        &self,
        subject_id: &str,
        game: GameType,
        page: usize,
        size: usize,
    ) -> Result<RawHistoryPage> {
        if self.failing.contains(&game) {
            return Err(Error::Source {
                game,
                reason: "simulated outage".to_string(),
            });
        }

        let mut items = self
            .records
            .get(&(subject_id.to_string(), game))
            .cloned()
            .unwrap_or_default();
        let sort_key = |v: &Value| {
            (
                v.get("dateTime")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                v.get("sessionId")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            )
        };
        items.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));

        let size = size.max(1);
        let total_elements = items.len();
        let total_pages = total_elements.div_ceil(size);
        let start = page.saturating_mul(size);
        let content = if start >= total_elements {
            Vec::new()
        } else {
            items[start..(start + size).min(total_elements)].to_vec()
        };

        Ok(RawHistoryPage {
            content,
            total_pages,
            total_elements,
        })
    }
}
