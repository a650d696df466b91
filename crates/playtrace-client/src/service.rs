use futures::future::join_all;
use playtrace_engine::{
    aggregate_history, compare_subjects, compute_trend, paginate_history, summarize_play,
};
use playtrace_extractors::SessionNormalizer;
use playtrace_types::{
    CanonicalSession, CompareOptions, ComparisonReport, GameProfile, GameType, PageRequest,
    SessionPage, SubjectOverview, TrendScope,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::Result;
use crate::source::SessionSource;

/// Per-request analytics orchestration over a `SessionSource`.
///
/// Everything here is recomputed per call from immutable values — there
/// is no shared mutable cache and no locking. Independent fetches run
/// concurrently (fire all, await all); dropping a returned future
/// abandons its in-flight fetches without publishing partial results.
pub struct AnalyticsClient {
    source: Arc<dyn SessionSource>,
    normalizer: SessionNormalizer,
    page_size: usize,
}

impl AnalyticsClient {
    pub fn new(source: Arc<dyn SessionSource>) -> Self {
        Self::with_page_size(source, crate::config::DEFAULT_PAGE_SIZE)
    }

    /// `page_size` below 1 is treated as 1.
    pub fn with_page_size(source: Arc<dyn SessionSource>, page_size: usize) -> Self {
        Self {
            source,
            normalizer: SessionNormalizer::new(),
            page_size: page_size.max(1),
        }
    }

    /// Full normalized history for one subject/game, newest pages walked
    /// first as the service serves them. Records that fail to decode or
    /// normalize are skipped with a warning; they never fail the fetch.
    pub async fn game_history(
        &self,
        subject_id: &str,
        game: GameType,
    ) -> Result<Vec<CanonicalSession>> {
        let first = self
            .source
            .fetch_history(subject_id, game, 0, self.page_size)
            .await?;
        let total_pages = first.total_pages;
        let mut records = first.content;

        for page in 1..total_pages {
            let next = self
                .source
                .fetch_history(subject_id, game, page, self.page_size)
                .await?;
            if next.content.is_empty() {
                // The underlying set shrank mid-walk; stop rather than
                // spin on empty pages.
                break;
            }
            records.extend(next.content);
        }
        debug!(
            subject = subject_id,
            game = game.tag(),
            records = records.len(),
            "fetched session history"
        );

        let sessions = records
            .iter()
            .filter_map(|record| {
                let record = stamp_game_tag(record, game);
                match self.normalizer.normalize_record(&record) {
                    Ok(session) => Some(session),
                    Err(err) => {
                        warn!(
                            game = game.tag(),
                            error = %err,
                            "skipping session record"
                        );
                        None
                    }
                }
            })
            .collect();
        Ok(sessions)
    }

    /// Statistics + all-kinds trend for one subject/game.
    pub async fn game_profile(&self, subject_id: &str, game: GameType) -> Result<GameProfile> {
        let history = self.game_history(subject_id, game).await?;
        Ok(build_profile(game, &history))
    }

    /// One newest-first page of a subject's normalized history.
    pub async fn session_page(
        &self,
        subject_id: &str,
        game: GameType,
        request: PageRequest,
    ) -> Result<SessionPage> {
        let history = self.game_history(subject_id, game).await?;
        Ok(paginate_history(&history, request))
    }

    /// All five game profiles plus the cross-game play summary.
    ///
    /// The five fetches are mutually independent reads and are issued
    /// concurrently; a failure in one degrades that game to zero-session
    /// defaults instead of failing the request.
    pub async fn subject_overview(&self, subject_id: &str) -> SubjectOverview {
        let fetches = GameType::ALL
            .iter()
            .map(|game| self.profile_or_default(subject_id, *game));
        let games = join_all(fetches).await;
        let summary = summarize_play(&games);
        SubjectOverview {
            subject_id: subject_id.to_string(),
            games,
            summary,
        }
    }

    /// Compare two subjects across all games. Both overviews (ten
    /// per-game fetches in total) run fully concurrently with no
    /// ordering guarantee between them.
    pub async fn compare_subjects(
        &self,
        subject_a: &str,
        subject_b: &str,
        options: &CompareOptions,
    ) -> ComparisonReport {
        let (a, b) = tokio::join!(
            self.subject_overview(subject_a),
            self.subject_overview(subject_b)
        );
        compare_subjects(&a, &b, options)
    }

    async fn profile_or_default(&self, subject_id: &str, game: GameType) -> GameProfile {
        match self.game_profile(subject_id, game).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(
                    subject = subject_id,
                    game = game.tag(),
                    error = %err,
                    "game degraded to zero-session defaults"
                );
                build_profile(game, &[])
            }
        }
    }
}

fn build_profile(game: GameType, history: &[CanonicalSession]) -> GameProfile {
    GameProfile {
        game_type: game,
        stats: aggregate_history(game, history),
        trend: compute_trend(game, TrendScope::AllKinds, history),
    }
}

/// The per-game services omit the game tag from their records (each
/// service is single-game); stamp it from the endpoint that was queried
/// so normalization can dispatch. An existing tag is left alone.
fn stamp_game_tag(record: &serde_json::Value, game: GameType) -> serde_json::Value {
    let mut record = record.clone();
    if let Some(map) = record.as_object_mut() {
        map.entry("gameType")
            .or_insert_with(|| serde_json::Value::String(game.tag().to_string()));
    }
    record
}
