use playtrace_types::{AggregateStatistics, CanonicalSession, GameType, ValueSemantics};

use crate::order::chronological;

/// Reduce an ordered session history (one subject, one game) into
/// per-kind statistics.
///
/// Sessions of another game type are ignored. Values are summed in
/// chronological order (timestamp asc, session id asc) regardless of the
/// caller's ordering, so re-running on an unchanged history produces
/// bit-identical output.
///
/// An average of `0.0` means "no data" only when the kind's completion
/// count is `0`; callers must check the count before trusting the
/// average, since `0.0` is also a valid measured mean.
pub fn aggregate(game_type: GameType, sessions: &[CanonicalSession]) -> AggregateStatistics {
    let matching: Vec<CanonicalSession> = sessions
        .iter()
        .filter(|s| s.game_type == game_type)
        .cloned()
        .collect();
    let ordered = chronological(&matching);

    let mut stats = AggregateStatistics::empty(game_type);
    stats.total_sessions = ordered.len();
    stats.last_played = ordered.last().map(|s| s.timestamp);

    let total = ordered.len();
    for kind in game_type.trial_kinds() {
        let values: Vec<f64> = ordered.iter().filter_map(|s| s.value_of(*kind)).collect();
        let count = values.len();

        let average = if count > 0 {
            values.iter().sum::<f64>() / count as f64
        } else {
            0.0
        };
        let ratio = if total > 0 {
            (count as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        stats.average_by.insert(*kind, average);
        stats.completion_count_by.insert(*kind, count);
        stats.completion_ratio_by.insert(*kind, ratio);
        stats
            .consistency_by
            .insert(*kind, consistency_score(&values));
        stats
            .best_by
            .insert(*kind, best_value(&values, game_type.value_semantics()));
    }

    stats
}

/// 0-100 score from the coefficient of variation: low relative spread
/// scores high. Defined as `max(0, 100 - 100 * stddev/mean)` with the
/// population standard deviation, and `0` with fewer than two samples or
/// a zero mean. The formula is a pinned design decision — reproducibility
/// matters more than any particular statistical pedigree here.
fn consistency_score(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (100.0 - 100.0 * variance.sqrt() / mean).max(0.0)
}

/// Best observed value under the game's polarity: fastest time for
/// durations, highest score/count otherwise.
fn best_value(values: &[f64], semantics: ValueSemantics) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let folded = if semantics.higher_is_better() {
        values.iter().copied().fold(f64::MIN, f64::max)
    } else {
        values.iter().copied().fold(f64::MAX, f64::min)
    };
    Some(folded)
}
