use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::game::GameType;

/// Which already-computed statistic a comparison ranks subjects by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMetric {
    /// Per-game mean of the per-kind averages (polarity-aware).
    BestValue,
    /// Per-game mean completion ratio.
    CompletionRatio,
    /// Per-game mean consistency score.
    Consistency,
    /// Trend improvement percentage.
    Improvement,
}

/// Outcome of one per-game comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    SubjectA,
    SubjectB,
    Tie,
}

/// Comparison configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareOptions {
    pub metric: ComparisonMetric,
    /// Gaps at or below this are a tie. Default `0.0` (exact comparison).
    pub epsilon: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            metric: ComparisonMetric::BestValue,
            epsilon: 0.0,
        }
    }
}

/// Category of a generated insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// One subject leads the other in a game.
    GameLead,
    /// A subject's strongest game.
    Strength,
    /// A subject's weakest game (area for growth).
    Growth,
}

/// Natural-language-ready structured insight.
///
/// Built purely from already-computed aggregates — comparison and
/// formatting-ready structuring only, no independent statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_type: Option<GameType>,
    /// Which side the insight is about, when it is about one side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<Winner>,
    pub headline: String,
    pub detail: String,
    /// Magnitude backing the insight, used for ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

/// Two-subject comparison report. Built fresh per request; no lifecycle
/// beyond it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub subject_a: String,
    pub subject_b: String,
    pub metric: ComparisonMetric,
    pub per_game_winner: BTreeMap<GameType, Winner>,
    /// Ranked most-significant first (by |delta|).
    pub insights: Vec<Insight>,
}
