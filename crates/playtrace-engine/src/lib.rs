// Engine module - pure statistics over canonical sessions
// This layer sits between normalized sessions (types) and presentation;
// it performs no I/O and holds no state.

pub mod aggregate;
pub mod compare;
mod order;
pub mod paginate;
pub mod summary;
pub mod trend;

pub use aggregate::aggregate;
pub use compare::compare;
pub use paginate::paginate;
pub use summary::play_summary;
pub use trend::trend;

use playtrace_types::{
    AggregateStatistics, CanonicalSession, CompareOptions, ComparisonReport, GameProfile,
    GameType, PageRequest, PlaySummary, SessionPage, SubjectOverview, TrendScope, TrendSeries,
};

// Façade API - stable entry points for orchestration layers

/// Reduce one subject's history for one game into statistics.
pub fn aggregate_history(
    game_type: GameType,
    sessions: &[CanonicalSession],
) -> AggregateStatistics {
    aggregate::aggregate(game_type, sessions)
}

/// Chronological time series + improvement for one subject/game.
pub fn compute_trend(
    game_type: GameType,
    scope: TrendScope,
    sessions: &[CanonicalSession],
) -> TrendSeries {
    trend::trend(game_type, scope, sessions)
}

/// Newest-first stable page over a history.
pub fn paginate_history(sessions: &[CanonicalSession], request: PageRequest) -> SessionPage {
    paginate::paginate(sessions, request)
}

/// Cross-game play activity from per-game profiles.
pub fn summarize_play(profiles: &[GameProfile]) -> PlaySummary {
    summary::play_summary(profiles)
}

/// Join two subjects' overviews into a ranked comparison report.
pub fn compare_subjects(
    a: &SubjectOverview,
    b: &SubjectOverview,
    options: &CompareOptions,
) -> ComparisonReport {
    compare::compare(a, b, options)
}
