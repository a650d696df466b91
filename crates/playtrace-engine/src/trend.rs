use playtrace_types::{
    CanonicalSession, GameType, Improvement, TrendPoint, TrendScope, TrendSeries, TrialKind,
    ValueSemantics,
};

use crate::order::chronological;

/// Chronological (oldest→newest) per-session series plus the
/// improvement summary between the earliest and latest sessions.
///
/// Each session contributes the sum of its non-null values in scope
/// divided by the number of kinds in scope — trials without data count
/// as zero against a fixed denominator. That mirrors the "no data
/// counted as zero" policy used across the statistics; callers that need
/// to distinguish "no data" from "zero performance" consult the
/// aggregator's completion counts instead.
pub fn trend(game_type: GameType, scope: TrendScope, sessions: &[CanonicalSession]) -> TrendSeries {
    let matching: Vec<CanonicalSession> = sessions
        .iter()
        .filter(|s| s.game_type == game_type)
        .cloned()
        .collect();
    let ordered = chronological(&matching);

    let kinds: Vec<TrialKind> = match scope {
        TrendScope::AllKinds => game_type.trial_kinds().to_vec(),
        TrendScope::Kind(kind) => vec![kind],
    };

    let points: Vec<TrendPoint> = ordered
        .iter()
        .enumerate()
        .map(|(session_index, session)| TrendPoint {
            session_index,
            aggregate_value: session_value(session, &kinds),
            session_timestamp: session.timestamp,
        })
        .collect();

    let improvement = improvement(&points, game_type.value_semantics());
    TrendSeries {
        game_type,
        scope,
        points,
        improvement,
    }
}

fn session_value(session: &CanonicalSession, kinds: &[TrialKind]) -> f64 {
    let sum: f64 = kinds.iter().filter_map(|k| session.value_of(*k)).sum();
    sum / kinds.len() as f64
}

/// Percentage change between the first and last points, sign-adjusted so
/// positive always means improvement: durations improve by going down,
/// scores and counts by going up. Fewer than two points is
/// `InsufficientData` and a zero first value is `Undefined` — both
/// distinct states, never a silent `0%`.
fn improvement(points: &[TrendPoint], semantics: ValueSemantics) -> Improvement {
    match points {
        [first, .., last] => {
            if first.aggregate_value == 0.0 {
                return Improvement::Undefined;
            }
            let raw = (last.aggregate_value - first.aggregate_value) / first.aggregate_value * 100.0;
            if semantics.higher_is_better() {
                Improvement::Percent(raw)
            } else {
                Improvement::Percent(-raw)
            }
        }
        _ => Improvement::InsufficientData,
    }
}
