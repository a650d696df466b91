use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::game::GameType;
use super::stats::{AggregateStatistics, TrendSeries};

/// One game's computed view for a subject: statistics plus the
/// all-kinds trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProfile {
    pub game_type: GameType,
    pub stats: AggregateStatistics,
    pub trend: TrendSeries,
}

/// Cross-game play activity for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaySummary {
    pub total_sessions: usize,
    pub session_counts_by_game: BTreeMap<GameType, usize>,
    /// Game with the most sessions; `None` when nothing was played.
    pub most_played: Option<GameType>,
    /// Game with the fewest sessions; `None` when nothing was played.
    pub least_played: Option<GameType>,
    pub last_played: Option<DateTime<Utc>>,
}

/// Everything the dashboards need for one subject: the five game
/// profiles (zero-data defaults where a game has no sessions or its
/// fetch degraded) and the cross-game play summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectOverview {
    pub subject_id: String,
    pub games: Vec<GameProfile>,
    pub summary: PlaySummary,
}

impl SubjectOverview {
    pub fn game(&self, game_type: GameType) -> Option<&GameProfile> {
        self.games.iter().find(|g| g.game_type == game_type)
    }
}
