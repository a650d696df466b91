use chrono::{DateTime, NaiveDateTime, Utc};
use playtrace_types::{CanonicalSession, GameType, RawSession};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::registry::create_all_extractors;
use crate::traits::MetricExtractor;

/// Dispatches raw records to the matching metric extractor and wraps the
/// result as an immutable `CanonicalSession`.
///
/// The extractor set is closed and registered at construction — new game
/// types are added to the registry, never discovered reflectively.
/// Normalization is idempotent: the same raw record always yields a
/// structurally equal canonical session.
pub struct SessionNormalizer {
    extractors: BTreeMap<GameType, Box<dyn MetricExtractor>>,
}

impl SessionNormalizer {
    /// Normalizer with every supported extractor registered.
    pub fn new() -> Self {
        let extractors = create_all_extractors()
            .into_iter()
            .map(|e| (e.game_type(), e))
            .collect();
        Self { extractors }
    }

    /// Whether a wire tag maps to a registered extractor.
    pub fn supports(&self, tag: &str) -> bool {
        GameType::from_tag(tag).is_some_and(|g| self.extractors.contains_key(&g))
    }

    /// Normalize one raw record.
    ///
    /// - Unrecognized `gameType` → `UnknownGameType` (recoverable)
    /// - Missing envelope fields or a bad timestamp → `Parse`
    pub fn normalize(&self, raw: &RawSession) -> Result<CanonicalSession> {
        let game_type = GameType::from_tag(&raw.game_type)
            .ok_or_else(|| Error::UnknownGameType(raw.game_type.clone()))?;
        let extractor = self
            .extractors
            .get(&game_type)
            .ok_or_else(|| Error::UnknownGameType(raw.game_type.clone()))?;

        if raw.session_id.is_empty() {
            return Err(Error::Parse("record has no sessionId".to_string()));
        }
        if raw.child_id.is_empty() {
            return Err(Error::Parse("record has no childId".to_string()));
        }
        let timestamp = parse_timestamp(&raw.date_time)?;

        let trials = extractor.extract(raw)?;
        Ok(CanonicalSession {
            session_id: raw.session_id.clone(),
            subject_id: raw.child_id.clone(),
            timestamp,
            game_type,
            trials,
        })
    }

    /// Normalize a record still in JSON form. Records that do not decode
    /// into the shared envelope are a `Parse` error, isolating one bad
    /// record from the rest of its page.
    pub fn normalize_record(&self, record: &serde_json::Value) -> Result<CanonicalSession> {
        let raw: RawSession = serde_json::from_value(record.clone())
            .map_err(|err| Error::Parse(format!("undecodable session record: {}", err)))?;
        self.normalize(&raw)
    }
}

impl Default for SessionNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Timestamps arrive either as RFC 3339 or as the bare local datetime
/// the Java services emit (`2024-01-15T10:30:00`); the latter is taken
/// as UTC.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    Err(Error::Parse(format!("unparseable dateTime '{}'", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_timestamp_shapes() {
        assert!(parse_timestamp("2024-01-15T10:30:00").is_ok());
        assert!(parse_timestamp("2024-01-15T10:30:00.250").is_ok());
        assert!(parse_timestamp("2024-01-15T10:30:00Z").is_ok());
        assert!(parse_timestamp("2024-01-15T10:30:00+05:30").is_ok());
        assert!(parse_timestamp("January 15").is_err());
    }

    #[test]
    fn unknown_game_type_is_explicit() {
        let normalizer = SessionNormalizer::new();
        let record = serde_json::json!({
            "sessionId": "s-1",
            "childId": "c-1",
            "dateTime": "2024-01-15T10:30:00",
            "gameType": "puzzle",
        });
        match normalizer.normalize_record(&record) {
            Err(Error::UnknownGameType(tag)) => assert_eq!(tag, "puzzle"),
            other => panic!("expected UnknownGameType, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_envelope_is_a_parse_error() {
        let normalizer = SessionNormalizer::new();
        let record = serde_json::json!({ "gameType": "gesture" });
        assert!(matches!(
            normalizer.normalize_record(&record),
            Err(Error::Parse(_))
        ));
    }
}
