use playtrace_types::{
    CompareOptions, ComparisonMetric, ComparisonReport, GameProfile, GameType, Insight,
    InsightCategory, SubjectOverview, Winner,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Join two subjects' computed overviews into a comparison report.
///
/// Winners and insights are derived purely from the already-computed
/// aggregates and trends — this layer compares and structures, it never
/// recomputes statistics. Polarity comes from each game's value
/// semantics: a lower mean time beats a higher one, while ratios,
/// consistency, and improvement always compare upward.
pub fn compare(
    a: &SubjectOverview,
    b: &SubjectOverview,
    options: &CompareOptions,
) -> ComparisonReport {
    let mut per_game_winner = BTreeMap::new();
    let mut insights = Vec::new();

    for game in GameType::ALL {
        let value_a = a.game(game).and_then(|p| metric_value(p, options.metric));
        let value_b = b.game(game).and_then(|p| metric_value(p, options.metric));
        let higher_is_better = metric_higher_is_better(options.metric, game);

        let winner = decide(value_a, value_b, higher_is_better, options.epsilon);
        per_game_winner.insert(game, winner);

        if let (Some(value_a), Some(value_b)) = (value_a, value_b)
            && winner != Winner::Tie
        {
            let delta = (value_a - value_b).abs();
            let leader_id = match winner {
                Winner::SubjectA => &a.subject_id,
                _ => &b.subject_id,
            };
            insights.push(Insight {
                category: InsightCategory::GameLead,
                game_type: Some(game),
                leader: Some(winner),
                headline: format!("{} lead", game.label()),
                detail: format!(
                    "{} leads {} by {:.1} {}",
                    leader_id,
                    game.label(),
                    delta,
                    metric_unit(options.metric, game)
                ),
                delta: Some(delta),
            });
        }
    }

    push_subject_insights(&mut insights, a, Winner::SubjectA);
    push_subject_insights(&mut insights, b, Winner::SubjectB);

    // Most significant first; equal deltas keep insertion order.
    insights.sort_by(|x, y| {
        let dx = x.delta.unwrap_or(0.0);
        let dy = y.delta.unwrap_or(0.0);
        dy.partial_cmp(&dx).unwrap_or(Ordering::Equal)
    });

    ComparisonReport {
        subject_a: a.subject_id.clone(),
        subject_b: b.subject_id.clone(),
        metric: options.metric,
        per_game_winner,
        insights,
    }
}

/// One side's value for a game under the chosen metric. `None` means the
/// subject has no usable data for that game — a data-holding side always
/// beats a dataless one, and two dataless sides tie.
fn metric_value(profile: &GameProfile, metric: ComparisonMetric) -> Option<f64> {
    let stats = &profile.stats;
    if stats.total_sessions == 0 {
        return None;
    }
    match metric {
        ComparisonMetric::BestValue => {
            let averages: Vec<f64> = stats
                .average_by
                .iter()
                .filter(|(kind, _)| stats.has_data(**kind))
                .map(|(_, avg)| *avg)
                .collect();
            mean(&averages)
        }
        ComparisonMetric::CompletionRatio => {
            let ratios: Vec<f64> = stats.completion_ratio_by.values().copied().collect();
            mean(&ratios)
        }
        ComparisonMetric::Consistency => {
            let scores: Vec<f64> = stats.consistency_by.values().copied().collect();
            mean(&scores)
        }
        ComparisonMetric::Improvement => profile.trend.improvement.as_percent(),
    }
}

fn metric_higher_is_better(metric: ComparisonMetric, game: GameType) -> bool {
    match metric {
        // Raw values inherit the game's polarity.
        ComparisonMetric::BestValue => game.value_semantics().higher_is_better(),
        // Derived 0-100 scores and polarity-adjusted percentages always
        // compare upward.
        ComparisonMetric::CompletionRatio
        | ComparisonMetric::Consistency
        | ComparisonMetric::Improvement => true,
    }
}

fn metric_unit(metric: ComparisonMetric, game: GameType) -> &'static str {
    use playtrace_types::ValueSemantics;
    match metric {
        ComparisonMetric::BestValue => match game.value_semantics() {
            ValueSemantics::Duration => "seconds",
            ValueSemantics::ScorePercent => "points",
            ValueSemantics::Count => "events",
        },
        ComparisonMetric::CompletionRatio | ComparisonMetric::Consistency => "points",
        ComparisonMetric::Improvement => "percentage points",
    }
}

fn decide(a: Option<f64>, b: Option<f64>, higher_is_better: bool, epsilon: f64) -> Winner {
    match (a, b) {
        (None, None) => Winner::Tie,
        (Some(_), None) => Winner::SubjectA,
        (None, Some(_)) => Winner::SubjectB,
        (Some(a), Some(b)) => {
            if (a - b).abs() <= epsilon {
                Winner::Tie
            } else if (a > b) == higher_is_better {
                Winner::SubjectA
            } else {
                Winner::SubjectB
            }
        }
    }
}

/// Strongest game and area for growth for one subject, ranked by mean
/// completion ratio (the one 0-100 value comparable across games) with
/// consistency as the tie-break.
fn push_subject_insights(insights: &mut Vec<Insight>, subject: &SubjectOverview, side: Winner) {
    let mut ranked: Vec<(&GameProfile, f64, f64)> = subject
        .games
        .iter()
        .filter(|p| p.stats.total_sessions > 0)
        .map(|p| {
            let ratio = metric_value(p, ComparisonMetric::CompletionRatio).unwrap_or(0.0);
            let consistency = metric_value(p, ComparisonMetric::Consistency).unwrap_or(0.0);
            (p, ratio, consistency)
        })
        .collect();
    ranked.sort_by(|x, y| {
        (y.1, y.2)
            .partial_cmp(&(x.1, x.2))
            .unwrap_or(Ordering::Equal)
    });

    if let Some((best, ratio, _)) = ranked.first() {
        insights.push(Insight {
            category: InsightCategory::Strength,
            game_type: Some(best.game_type),
            leader: Some(side),
            headline: "Strongest area".to_string(),
            detail: format!(
                "{} completes {:.0}% of {} trials",
                subject.subject_id,
                ratio,
                best.game_type.label()
            ),
            delta: Some(*ratio),
        });
    }
    if ranked.len() > 1 {
        if let Some((worst, ratio, _)) = ranked.last() {
            insights.push(Insight {
                category: InsightCategory::Growth,
                game_type: Some(worst.game_type),
                leader: Some(side),
                headline: "Area for growth".to_string(),
                detail: format!(
                    "{} completes only {:.0}% of {} trials",
                    subject.subject_id,
                    ratio,
                    worst.game_type.label()
                ),
                delta: Some(100.0 - *ratio),
            });
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::play_summary;
    use chrono::{TimeZone, Utc};
    use playtrace_types::{CanonicalSession, CanonicalTrial, TrendScope, TrialKind};

    fn gesture_session(subject: &str, session_id: &str, day: u32, heart: f64) -> CanonicalSession {
        let game = GameType::Gesture;
        let trials = game
            .trial_kinds()
            .iter()
            .map(|kind| CanonicalTrial {
                kind: *kind,
                value: (*kind == TrialKind::Heart).then_some(heart),
                semantics: game.value_semantics(),
            })
            .collect();
        CanonicalSession {
            session_id: session_id.to_string(),
            subject_id: subject.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, day, 10, 0, 0).unwrap(),
            game_type: game,
            trials,
        }
    }

    fn overview_from(subject: &str, sessions: &[CanonicalSession]) -> SubjectOverview {
        let games: Vec<GameProfile> = GameType::ALL
            .iter()
            .map(|game| GameProfile {
                game_type: *game,
                stats: crate::aggregate::aggregate(*game, sessions),
                trend: crate::trend::trend(*game, TrendScope::AllKinds, sessions),
            })
            .collect();
        let summary = play_summary(&games);
        SubjectOverview {
            subject_id: subject.to_string(),
            games,
            summary,
        }
    }

    #[test]
    fn faster_durations_win_best_value() {
        // Subject A averages 2s on Heart, subject B averages 6s.
        let a = overview_from(
            "child-a",
            &[
                gesture_session("child-a", "a-1", 1, 2.0),
                gesture_session("child-a", "a-2", 2, 2.0),
            ],
        );
        let b = overview_from(
            "child-b",
            &[
                gesture_session("child-b", "b-1", 1, 6.0),
                gesture_session("child-b", "b-2", 2, 6.0),
            ],
        );

        let report = compare(&a, &b, &CompareOptions::default());
        assert_eq!(report.per_game_winner[&GameType::Gesture], Winner::SubjectA);
        // Games neither subject played tie.
        assert_eq!(report.per_game_winner[&GameType::Gaze], Winner::Tie);
    }

    #[test]
    fn data_beats_no_data_and_gaps_within_epsilon_tie() {
        let a = overview_from("child-a", &[gesture_session("child-a", "a-1", 1, 3.0)]);
        let b = overview_from("child-b", &[]);
        let report = compare(&a, &b, &CompareOptions::default());
        assert_eq!(report.per_game_winner[&GameType::Gesture], Winner::SubjectA);

        let b = overview_from("child-b", &[gesture_session("child-b", "b-1", 1, 3.4)]);
        let loose = CompareOptions {
            epsilon: 0.5,
            ..CompareOptions::default()
        };
        let report = compare(&a, &b, &loose);
        assert_eq!(report.per_game_winner[&GameType::Gesture], Winner::Tie);
    }

    #[test]
    fn improvement_metric_requires_numeric_trends() {
        // One session each: both trends are InsufficientData -> tie, and
        // never a fabricated 0% comparison.
        let a = overview_from("child-a", &[gesture_session("child-a", "a-1", 1, 3.0)]);
        let b = overview_from("child-b", &[gesture_session("child-b", "b-1", 1, 9.0)]);
        let options = CompareOptions {
            metric: ComparisonMetric::Improvement,
            epsilon: 0.0,
        };
        let report = compare(&a, &b, &options);
        assert_eq!(report.per_game_winner[&GameType::Gesture], Winner::Tie);
    }

    #[test]
    fn insights_are_ranked_and_structured() {
        let a = overview_from(
            "child-a",
            &[
                gesture_session("child-a", "a-1", 1, 2.0),
                gesture_session("child-a", "a-2", 2, 2.0),
            ],
        );
        let b = overview_from(
            "child-b",
            &[
                gesture_session("child-b", "b-1", 1, 6.0),
                gesture_session("child-b", "b-2", 2, 6.0),
            ],
        );
        let report = compare(&a, &b, &CompareOptions::default());

        assert!(!report.insights.is_empty());
        let lead = report
            .insights
            .iter()
            .find(|i| i.category == InsightCategory::GameLead)
            .expect("expected a game lead insight");
        assert_eq!(lead.game_type, Some(GameType::Gesture));
        assert_eq!(lead.leader, Some(Winner::SubjectA));
        assert!(lead.detail.contains("child-a"));
        assert!(lead.detail.contains("4.0 seconds"));

        // Ranked by delta, descending.
        let deltas: Vec<f64> = report.insights.iter().filter_map(|i| i.delta).collect();
        assert!(deltas.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn single_game_subject_gets_strength_but_no_growth_insight() {
        let a = overview_from("child-a", &[gesture_session("child-a", "a-1", 1, 2.0)]);
        let b = overview_from("child-b", &[]);
        let report = compare(&a, &b, &CompareOptions::default());

        let about_a: Vec<&Insight> = report
            .insights
            .iter()
            .filter(|i| i.leader == Some(Winner::SubjectA))
            .collect();
        assert!(
            about_a
                .iter()
                .any(|i| i.category == InsightCategory::Strength)
        );
        assert!(
            !about_a
                .iter()
                .any(|i| i.category == InsightCategory::Growth)
        );
    }
}
