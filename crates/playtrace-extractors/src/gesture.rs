use playtrace_types::{CanonicalTrial, GameType, RawSession};
use serde::Deserialize;

use crate::error::Result;
use crate::traits::{MetricExtractor, ensure_game, lenient_number, parse_fields, to_trials};

/// Wire fields of a gesture-recognition session: one completion time in
/// seconds per gesture, null when the gesture was not completed. The
/// service also sends `videoURL`, ASD flags, and training consent; those
/// are not measurements and are ignored here.
#[derive(Debug, Default, Deserialize)]
struct GestureFields {
    #[serde(default, deserialize_with = "lenient_number")]
    thumbs_up: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    thumbs_down: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    victory: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    butterfly: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    spectacle: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    heart: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pointing_up: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    iloveyou: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    dua: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    closed_fist: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    open_palm: Option<f64>,
}

/// Gesture game: 11 gestures, duration semantics (lower is better).
pub struct GestureExtractor;

impl MetricExtractor for GestureExtractor {
    fn game_type(&self) -> GameType {
        GameType::Gesture
    }

    fn extract(&self, raw: &RawSession) -> Result<Vec<CanonicalTrial>> {
        ensure_game(GameType::Gesture, raw)?;
        let fields: GestureFields = parse_fields(raw)?;
        let values = [
            fields.thumbs_up,
            fields.thumbs_down,
            fields.victory,
            fields.butterfly,
            fields.spectacle,
            fields.heart,
            fields.pointing_up,
            fields.iloveyou,
            fields.dua,
            fields.closed_fist,
            fields.open_palm,
        ];
        Ok(to_trials(GameType::Gesture, &values))
    }
}
