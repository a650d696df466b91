use playtrace_types::{CanonicalTrial, GameType, RawSession};
use serde::Deserialize;

use crate::error::Result;
use crate::traits::{MetricExtractor, ensure_game, lenient_number, parse_fields, to_trials};

/// Wire fields of a mirror-posture session (camelCase, completion
/// seconds per posture).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostureFields {
    #[serde(default, deserialize_with = "lenient_number")]
    looking_sideways: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    mouth_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    showing_teeth: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    kiss: Option<f64>,
}

/// Mirror posture game: 4 postures, duration semantics.
pub struct PostureExtractor;

impl MetricExtractor for PostureExtractor {
    fn game_type(&self) -> GameType {
        GameType::MirrorPosture
    }

    fn extract(&self, raw: &RawSession) -> Result<Vec<CanonicalTrial>> {
        ensure_game(GameType::MirrorPosture, raw)?;
        let fields: PostureFields = parse_fields(raw)?;
        let values = [
            fields.looking_sideways,
            fields.mouth_open,
            fields.showing_teeth,
            fields.kiss,
        ];
        Ok(to_trials(GameType::MirrorPosture, &values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playtrace_types::TrialKind;

    #[test]
    fn camel_case_fields_map_in_order() {
        let raw: RawSession = serde_json::from_value(serde_json::json!({
            "sessionId": "s-1",
            "childId": "c-1",
            "dateTime": "2024-03-04T10:00:00",
            "gameType": "mirror-posture",
            "lookingSideways": 4,
            "showingTeeth": 6.5,
        }))
        .unwrap();

        let trials = PostureExtractor.extract(&raw).unwrap();
        assert_eq!(trials.len(), 4);
        assert_eq!(trials[0].kind, TrialKind::LookingSideways);
        assert_eq!(trials[0].value, Some(4.0));
        assert_eq!(trials[1].value, None);
        assert_eq!(trials[2].value, Some(6.5));
        assert_eq!(trials[3].value, None);
    }
}
