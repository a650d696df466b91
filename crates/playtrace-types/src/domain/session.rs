use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::game::{GameType, TrialKind, ValueSemantics};

/// Externally-sourced session record as the game services persist it.
///
/// Only the envelope is shared across games; the measurement fields are
/// game-specific and land in `fields` untouched. This subsystem does not
/// control the field set — extractors own the per-game schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSession {
    pub session_id: String,
    /// Subject (child) the session belongs to.
    pub child_id: String,
    /// Timestamp string as sent by the service (RFC 3339 or bare local datetime).
    pub date_time: String,
    /// Wire tag of the originating game. The per-game services omit it;
    /// the fetch layer stamps it from the endpoint that was queried.
    #[serde(default)]
    pub game_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<i64>,
    /// Game-specific measurement fields, uninterpreted.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// One normalized measurement.
///
/// `value == None` means the trial was not attempted/completed in that
/// session — a first-class state, distinct from `Some(0.0)` which is a
/// valid measured outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTrial {
    pub kind: TrialKind,
    pub value: Option<f64>,
    pub semantics: ValueSemantics,
}

/// Game-agnostic representation of one raw session record.
///
/// Created by the session normalizer from exactly one `RawSession`, never
/// mutated afterwards. `trials` always has one entry per kind of the
/// game's fixed trial-kind list, in that list's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSession {
    pub session_id: String,
    pub subject_id: String,
    pub timestamp: DateTime<Utc>,
    pub game_type: GameType,
    pub trials: Vec<CanonicalTrial>,
}

impl CanonicalSession {
    /// Value recorded for a trial kind, if attempted.
    pub fn value_of(&self, kind: TrialKind) -> Option<f64> {
        self.trials
            .iter()
            .find(|t| t.kind == kind)
            .and_then(|t| t.value)
    }
}
