use playtrace_types::{CanonicalTrial, GameType, RawSession, TrialKind};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// Maps one game's raw session fields onto its fixed, ordered trial-kind
/// list.
///
/// Responsibilities:
/// - Own the game-specific wire schema (field names, shapes)
/// - Produce exactly one `CanonicalTrial` per kind, in kind order
/// - Represent absent/non-numeric fields as `value: None`, never by
///   dropping the entry
///
/// Extractors are pure functions of the raw record; routing by game type
/// is the caller's job (see `SessionNormalizer`).
pub trait MetricExtractor: Send + Sync {
    /// The single game type this extractor understands.
    fn game_type(&self) -> GameType;

    /// Map a raw record of the matching game type to canonical trials.
    fn extract(&self, raw: &RawSession) -> Result<Vec<CanonicalTrial>>;
}

/// Guard shared by every extractor: the record's tag must match.
pub(crate) fn ensure_game(expected: GameType, raw: &RawSession) -> Result<()> {
    if raw.game_type != expected.tag() {
        return Err(Error::SchemaMismatch {
            expected,
            found: raw.game_type.clone(),
        });
    }
    Ok(())
}

/// Zip a game's kind list with extracted values into canonical trials.
///
/// `values` must follow the game's trial-kind order; the two lists are
/// the same length by construction in each extractor.
pub(crate) fn to_trials(game: GameType, values: &[Option<f64>]) -> Vec<CanonicalTrial> {
    let kinds: &[TrialKind] = game.trial_kinds();
    debug_assert_eq!(kinds.len(), values.len());
    let semantics = game.value_semantics();
    kinds
        .iter()
        .zip(values.iter())
        .map(|(kind, value)| CanonicalTrial {
            kind: *kind,
            value: *value,
            semantics,
        })
        .collect()
}

/// Lenient numeric field: absent or non-numeric JSON (null, strings,
/// booleans) becomes `None` instead of failing the whole record.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Parse a game-specific field struct out of a raw record's field map.
pub(crate) fn parse_fields<T: serde::de::DeserializeOwned>(raw: &RawSession) -> Result<T> {
    Ok(serde_json::from_value(serde_json::Value::Object(
        raw.fields.clone(),
    ))?)
}
