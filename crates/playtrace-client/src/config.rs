use crate::error::Result;
use playtrace_extractors::metadata_for;
use playtrace_types::GameType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Page size used when walking a subject's full history.
pub const DEFAULT_PAGE_SIZE: usize = 50;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Where the five game history services live.
///
/// Each game has a well-known service path (from the extractor
/// registry); deployments that route differently can override paths per
/// game tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the gateway fronting the game services.
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Per-game service path overrides, keyed by game tag.
    #[serde(default)]
    pub service_paths: HashMap<String, String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            service_paths: HashMap::new(),
        }
    }
}

impl EndpointConfig {
    /// Load from a TOML file; a missing file is the default config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Service path for a game, override first.
    pub fn service_path(&self, game: GameType) -> &str {
        self.service_paths
            .get(game.tag())
            .map(String::as_str)
            .unwrap_or(metadata_for(game).service_path)
    }

    /// `GET {base}/{service}/subject/{id}/history?page={n}&size={m}`
    pub fn history_url(&self, game: GameType, subject_id: &str, page: usize, size: usize) -> String {
        format!(
            "{}/{}/subject/{}/history?page={}&size={}",
            self.base_url.trim_end_matches('/'),
            self.service_path(game),
            subject_id,
            page,
            size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths_come_from_the_registry() {
        let config = EndpointConfig::default();
        assert_eq!(config.service_path(GameType::Gesture), "gesture-game");
        assert_eq!(
            config.history_url(GameType::Gaze, "child-7", 2, 25),
            "http://localhost:8080/api/gaze-game/subject/child-7/history?page=2&size=25"
        );
    }

    #[test]
    fn test_overrides_win_over_registry_defaults() {
        let mut config = EndpointConfig::default();
        config
            .service_paths
            .insert("gesture".to_string(), "v2/gesture".to_string());
        assert_eq!(config.service_path(GameType::Gesture), "v2/gesture");
        assert_eq!(config.service_path(GameType::Gaze), "gaze-game");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("endpoints.toml");

        let mut config = EndpointConfig::default();
        config.base_url = "https://games.example.net/api".to_string();
        config.page_size = 25;
        config.save_to(&config_path)?;

        let loaded = EndpointConfig::load_from(&config_path)?;
        assert_eq!(loaded.base_url, "https://games.example.net/api");
        assert_eq!(loaded.page_size, 25);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = EndpointConfig::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        Ok(())
    }
}
