use playtrace_client::AnalyticsClient;
use playtrace_testing::{InMemorySource, RawRecordBuilder, uniform_record};
use playtrace_types::{
    CompareOptions, GameType, Improvement, PageRequest, TrialKind, Winner,
};
use std::sync::Arc;

fn day_stamp(day: u32) -> String {
    format!("2024-03-{day:02}T10:00:00")
}

#[tokio::test]
async fn history_walks_every_page() {
    let mut source = InMemorySource::new();
    for day in 1..=5 {
        source.push(
            "c-1",
            GameType::Gesture,
            uniform_record(GameType::Gesture, &format!("s-{day}"), "c-1", &day_stamp(day), 3.0),
        );
    }
    let client = AnalyticsClient::with_page_size(Arc::new(source), 2);

    let history = client.game_history("c-1", GameType::Gesture).await.unwrap();
    assert_eq!(history.len(), 5);
}

#[tokio::test]
async fn untagged_service_records_are_stamped_and_normalized() {
    let mut source = InMemorySource::new();
    source.push(
        "c-1",
        GameType::Gaze,
        RawRecordBuilder::new(GameType::Gaze, "s-1", "c-1", &day_stamp(1))
            .field("round1Count", 6)
            .untagged()
            .build(),
    );
    let client = AnalyticsClient::new(Arc::new(source));

    let history = client.game_history("c-1", GameType::Gaze).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].game_type, GameType::Gaze);
    assert_eq!(history[0].value_of(TrialKind::GazeRound1), Some(6.0));
}

#[tokio::test]
async fn malformed_records_are_skipped_not_fatal() {
    let mut source = InMemorySource::new();
    source.push(
        "c-1",
        GameType::Gesture,
        uniform_record(GameType::Gesture, "s-good", "c-1", &day_stamp(1), 2.0),
    );
    // No sessionId: undecodable envelope.
    source.push(
        "c-1",
        GameType::Gesture,
        serde_json::json!({ "childId": "c-1", "dateTime": day_stamp(2) }),
    );
    let client = AnalyticsClient::new(Arc::new(source));

    let history = client.game_history("c-1", GameType::Gesture).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].session_id, "s-good");
}

#[tokio::test]
async fn one_failing_game_degrades_alone() {
    let mut source = InMemorySource::new();
    source.push(
        "c-1",
        GameType::Gaze,
        RawRecordBuilder::new(GameType::Gaze, "s-1", "c-1", &day_stamp(1))
            .field("round1Count", 5)
            .build(),
    );
    source.fail_game(GameType::Gesture);
    let client = AnalyticsClient::new(Arc::new(source));

    let overview = client.subject_overview("c-1").await;

    // The failing game comes back as zero-session defaults...
    let gesture = overview.game(GameType::Gesture).unwrap();
    assert_eq!(gesture.stats.total_sessions, 0);
    assert_eq!(gesture.trend.improvement, Improvement::InsufficientData);
    // ...while the healthy game is untouched.
    let gaze = overview.game(GameType::Gaze).unwrap();
    assert_eq!(gaze.stats.total_sessions, 1);
    assert_eq!(overview.summary.total_sessions, 1);
    assert_eq!(overview.summary.most_played, Some(GameType::Gaze));
}

#[tokio::test]
async fn subject_with_no_data_gets_full_zero_shape() {
    let client = AnalyticsClient::new(Arc::new(InMemorySource::new()));
    let overview = client.subject_overview("c-ghost").await;

    assert_eq!(overview.games.len(), GameType::ALL.len());
    for profile in &overview.games {
        assert_eq!(profile.stats.total_sessions, 0);
        assert_eq!(profile.trend.improvement, Improvement::InsufficientData);
        for ratio in profile.stats.completion_ratio_by.values() {
            assert_eq!(*ratio, 0.0);
        }
    }
    assert_eq!(overview.summary.most_played, None);
}

#[tokio::test]
async fn session_pages_are_newest_first_and_tolerant() {
    let mut source = InMemorySource::new();
    for day in 1..=5 {
        source.push(
            "c-1",
            GameType::DanceDoodle,
            uniform_record(
                GameType::DanceDoodle,
                &format!("s-{day}"),
                "c-1",
                &day_stamp(day),
                4.0,
            ),
        );
    }
    let client = AnalyticsClient::new(Arc::new(source));

    let page = client
        .session_page("c-1", GameType::DanceDoodle, PageRequest::new(0, 2))
        .await
        .unwrap();
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
    let ids: Vec<&str> = page.items.iter().map(|s| s.session_id.as_str()).collect();
    assert_eq!(ids, vec!["s-5", "s-4"]);

    let past_end = client
        .session_page("c-1", GameType::DanceDoodle, PageRequest::new(9, 2))
        .await
        .unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total_elements, 5);
}

#[tokio::test]
async fn comparison_runs_end_to_end_over_both_subjects() {
    let mut source = InMemorySource::new();
    // Subject A: quick, steady gesture times.
    for day in 1..=3 {
        source.push(
            "c-a",
            GameType::Gesture,
            uniform_record(GameType::Gesture, &format!("a-{day}"), "c-a", &day_stamp(day), 2.0),
        );
    }
    // Subject B: slower gesture times.
    for day in 1..=3 {
        source.push(
            "c-b",
            GameType::Gesture,
            uniform_record(GameType::Gesture, &format!("b-{day}"), "c-b", &day_stamp(day), 7.0),
        );
    }
    let client = AnalyticsClient::new(Arc::new(source));

    let report = client
        .compare_subjects("c-a", "c-b", &CompareOptions::default())
        .await;

    assert_eq!(report.subject_a, "c-a");
    assert_eq!(report.subject_b, "c-b");
    assert_eq!(report.per_game_winner[&GameType::Gesture], Winner::SubjectA);
    assert_eq!(report.per_game_winner[&GameType::Gaze], Winner::Tie);
    assert!(!report.insights.is_empty());
}
