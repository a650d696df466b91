use playtrace_types::GameType;
use serde_json::{Map, Value, json};

/// Wire field names per game, in trial-kind order. The services use
/// snake_case for gesture/dance and camelCase elsewhere — fixtures must
/// reproduce that faithfully.
pub fn wire_fields(game: GameType) -> &'static [&'static str] {
    match game {
        GameType::Gesture => &[
            "thumbs_up",
            "thumbs_down",
            "victory",
            "butterfly",
            "spectacle",
            "heart",
            "pointing_up",
            "iloveyou",
            "dua",
            "closed_fist",
            "open_palm",
        ],
        GameType::MirrorPosture => &["lookingSideways", "mouthOpen", "showingTeeth", "kiss"],
        GameType::DanceDoodle => &[
            "cool_arms",
            "open_wings",
            "silly_boxer",
            "happy_stand",
            "crossy_play",
            "shh_fun",
            "stretch",
        ],
        GameType::Gaze => &["round1Count", "round2Count", "round3Count"],
        GameType::RepeatWithMe => &[
            "round1Score",
            "round2Score",
            "round3Score",
            "round4Score",
            "round5Score",
            "round6Score",
            "round7Score",
            "round8Score",
            "round9Score",
            "round10Score",
            "round11Score",
            "round12Score",
        ],
    }
}

/// Builds raw session records shaped like the game services' JSON.
pub struct RawRecordBuilder {
    record: Map<String, Value>,
}

impl RawRecordBuilder {
    pub fn new(game: GameType, session_id: &str, child_id: &str, date_time: &str) -> Self {
        let mut record = Map::new();
        record.insert("sessionId".to_string(), json!(session_id));
        record.insert("childId".to_string(), json!(child_id));
        record.insert("dateTime".to_string(), json!(date_time));
        record.insert("gameType".to_string(), json!(game.tag()));
        Self { record }
    }

    /// Drop the game tag, like the single-game services that leave
    /// tagging to the fetch layer.
    pub fn untagged(mut self) -> Self {
        self.record.remove("gameType");
        self
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.record.insert(name.to_string(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.record)
    }
}

/// A fully-completed record with every measurement field set to `value`.
pub fn uniform_record(
    game: GameType,
    session_id: &str,
    child_id: &str,
    date_time: &str,
    value: f64,
) -> Value {
    let mut builder = RawRecordBuilder::new(game, session_id, child_id, date_time);
    for field in wire_fields(game) {
        builder = builder.field(field, value);
    }
    builder.build()
}
