use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::game::{GameType, TrialKind};

/// Per-subject, per-game statistics over a session history.
///
/// Derived and recomputable at any time; a new value replaces the old one
/// whenever the input history changes. Every map carries the game's full
/// trial-kind set — "no data" is signalled by a zero completion count,
/// not by a missing entry, and callers must check the count before
/// trusting the corresponding average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatistics {
    pub game_type: GameType,
    pub total_sessions: usize,
    /// Mean of non-null values per kind; `0.0` when no data exists.
    pub average_by: BTreeMap<TrialKind, f64>,
    /// Sessions in which the kind was attempted/completed.
    pub completion_count_by: BTreeMap<TrialKind, usize>,
    /// `count / total_sessions * 100`, clamped to `[0, 100]`.
    pub completion_ratio_by: BTreeMap<TrialKind, f64>,
    /// 0-100 score from the coefficient of variation; see the aggregator.
    pub consistency_by: BTreeMap<TrialKind, f64>,
    /// Best observed value per kind honoring polarity (fastest time,
    /// highest score/count); `None` when the kind was never attempted.
    pub best_by: BTreeMap<TrialKind, Option<f64>>,
    /// Latest session timestamp, if any sessions exist.
    pub last_played: Option<DateTime<Utc>>,
}

impl AggregateStatistics {
    /// Zero-session statistics: the shape every consumer can rely on when
    /// a game has no data (or its fetch degraded).
    pub fn empty(game_type: GameType) -> Self {
        let kinds = game_type.trial_kinds();
        Self {
            game_type,
            total_sessions: 0,
            average_by: kinds.iter().map(|k| (*k, 0.0)).collect(),
            completion_count_by: kinds.iter().map(|k| (*k, 0)).collect(),
            completion_ratio_by: kinds.iter().map(|k| (*k, 0.0)).collect(),
            consistency_by: kinds.iter().map(|k| (*k, 0.0)).collect(),
            best_by: kinds.iter().map(|k| (*k, None)).collect(),
            last_played: None,
        }
    }

    /// Whether any session recorded a value for this kind.
    pub fn has_data(&self, kind: TrialKind) -> bool {
        self.completion_count_by.get(&kind).copied().unwrap_or(0) > 0
    }
}

/// Which trials a trend series covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendScope {
    /// Aggregate across every kind of the game.
    AllKinds,
    /// A single trial kind.
    Kind(TrialKind),
}

/// One session's aggregate value in a chronological series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 0-based position in chronological (oldest-first) order.
    pub session_index: usize,
    pub aggregate_value: f64,
    pub session_timestamp: DateTime<Utc>,
}

/// Improvement between the earliest and latest sessions.
///
/// The non-numeric states are deliberate: fewer than two sessions is
/// "insufficient data", and a zero first value makes the percentage
/// undefined. Neither is ever silently reported as `0%`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Improvement {
    InsufficientData,
    Undefined,
    /// Positive means improvement regardless of value semantics; the sign
    /// convention is already polarity-adjusted.
    Percent(f64),
}

impl Improvement {
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Improvement::Percent(p) => Some(*p),
            _ => None,
        }
    }
}

/// Chronological per-session time series plus the improvement summary.
///
/// Points run oldest→newest — the inverse of the history paginator's
/// newest-first ordering. The inversion is part of this type's contract,
/// not something callers infer from array position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub game_type: GameType,
    pub scope: TrendScope,
    pub points: Vec<TrendPoint>,
    pub improvement: Improvement,
}

impl TrendSeries {
    pub fn empty(game_type: GameType, scope: TrendScope) -> Self {
        Self {
            game_type,
            scope,
            points: Vec::new(),
            improvement: Improvement::InsufficientData,
        }
    }
}
