use playtrace_types::{CanonicalTrial, GameType, RawSession};
use serde::Deserialize;

use crate::error::Result;
use crate::traits::{MetricExtractor, ensure_game, lenient_number, parse_fields, to_trials};

/// Wire fields of a repeat-with-me session: one 0-100 similarity score
/// per round. The service also persists self-reported `averageScore` and
/// `completedRounds`; those are ignored so every game goes through the
/// same recomputation path in the aggregator.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepeatFields {
    #[serde(default, deserialize_with = "lenient_number")]
    round1_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round2_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round3_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round4_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round5_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round6_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round7_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round8_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round9_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round10_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round11_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    round12_score: Option<f64>,
}

/// Repeat-with-me game: 12 rounds, score-percent semantics.
pub struct RepeatExtractor;

impl MetricExtractor for RepeatExtractor {
    fn game_type(&self) -> GameType {
        GameType::RepeatWithMe
    }

    fn extract(&self, raw: &RawSession) -> Result<Vec<CanonicalTrial>> {
        ensure_game(GameType::RepeatWithMe, raw)?;
        let fields: RepeatFields = parse_fields(raw)?;
        let values = [
            fields.round1_score,
            fields.round2_score,
            fields.round3_score,
            fields.round4_score,
            fields.round5_score,
            fields.round6_score,
            fields.round7_score,
            fields.round8_score,
            fields.round9_score,
            fields.round10_score,
            fields.round11_score,
            fields.round12_score,
        ];
        Ok(to_trials(GameType::RepeatWithMe, &values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_reported_aggregates_are_ignored() {
        let raw: RawSession = serde_json::from_value(serde_json::json!({
            "sessionId": "s-1",
            "childId": "c-1",
            "dateTime": "2024-03-04T10:00:00",
            "gameType": "repeat-with-me",
            "round1Score": 80,
            "averageScore": 99.0,
            "completedRounds": 12,
        }))
        .unwrap();

        let trials = RepeatExtractor.extract(&raw).unwrap();
        assert_eq!(trials.len(), 12);
        assert_eq!(trials[0].value, Some(80.0));
        assert!(trials[1..].iter().all(|t| t.value.is_none()));
    }
}
