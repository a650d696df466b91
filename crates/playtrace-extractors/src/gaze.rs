use playtrace_types::{CanonicalTrial, GameType, RawSession};
use serde::Deserialize;

use crate::error::Result;
use crate::traits::{MetricExtractor, ensure_game, lenient_number, parse_fields, to_trials};

/// Wire fields of a gaze-tracking session: one event count per round.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GazeFields {
    #[serde(default, deserialize_with = "lenient_number")]
    round1_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round2_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round3_count: Option<f64>,
}

/// Gaze game: 3 rounds, count semantics (higher is better).
pub struct GazeExtractor;

impl MetricExtractor for GazeExtractor {
    fn game_type(&self) -> GameType {
        GameType::Gaze
    }

    fn extract(&self, raw: &RawSession) -> Result<Vec<CanonicalTrial>> {
        ensure_game(GameType::Gaze, raw)?;
        let fields: GazeFields = parse_fields(raw)?;
        let values = [fields.round1_count, fields.round2_count, fields.round3_count];
        Ok(to_trials(GameType::Gaze, &values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playtrace_types::ValueSemantics;

    #[test]
    fn counts_carry_count_semantics() {
        let raw: RawSession = serde_json::from_value(serde_json::json!({
            "sessionId": "s-1",
            "childId": "c-1",
            "dateTime": "2024-03-04T10:00:00",
            "gameType": "gaze",
            "round1Count": 7,
            "round2Count": 0,
        }))
        .unwrap();

        let trials = GazeExtractor.extract(&raw).unwrap();
        assert_eq!(trials.len(), 3);
        assert!(trials.iter().all(|t| t.semantics == ValueSemantics::Count));
        assert_eq!(trials[0].value, Some(7.0));
        // A measured zero is data, not absence.
        assert_eq!(trials[1].value, Some(0.0));
        assert_eq!(trials[2].value, None);
    }
}
