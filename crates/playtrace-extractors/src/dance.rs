use playtrace_types::{CanonicalTrial, GameType, RawSession};
use serde::Deserialize;

use crate::error::Result;
use crate::traits::{MetricExtractor, ensure_game, lenient_number, parse_fields, to_trials};

/// Wire fields of a dance-doodle session (snake_case, completion seconds
/// per pose).
#[derive(Debug, Default, Deserialize)]
struct DanceFields {
    #[serde(default, deserialize_with = "lenient_number")]
    cool_arms: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    open_wings: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    silly_boxer: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    happy_stand: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    crossy_play: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    shh_fun: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    stretch: Option<f64>,
}

/// Dance doodle game: 7 poses, duration semantics.
pub struct DanceExtractor;

impl MetricExtractor for DanceExtractor {
    fn game_type(&self) -> GameType {
        GameType::DanceDoodle
    }

    fn extract(&self, raw: &RawSession) -> Result<Vec<CanonicalTrial>> {
        ensure_game(GameType::DanceDoodle, raw)?;
        let fields: DanceFields = parse_fields(raw)?;
        let values = [
            fields.cool_arms,
            fields.open_wings,
            fields.silly_boxer,
            fields.happy_stand,
            fields.crossy_play,
            fields.shh_fun,
            fields.stretch,
        ];
        Ok(to_trials(GameType::DanceDoodle, &values))
    }
}
