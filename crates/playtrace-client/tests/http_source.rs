use playtrace_client::{EndpointConfig, Error, HttpSessionSource, SessionSource};
use playtrace_types::GameType;

fn config_for(server: &mockito::ServerGuard) -> EndpointConfig {
    EndpointConfig {
        base_url: server.url(),
        ..EndpointConfig::default()
    }
}

#[tokio::test]
async fn fetches_and_decodes_a_history_page() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::json!({
        "content": [
            { "sessionId": "s-1", "childId": "c-1", "dateTime": "2024-03-04T10:00:00", "heart": 2.5 }
        ],
        "totalPages": 1,
        "totalElements": 1
    });
    let mock = server
        .mock("GET", "/gesture-game/subject/c-1/history?page=0&size=50")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let source = HttpSessionSource::new(config_for(&server));
    let page = source
        .fetch_history("c-1", GameType::Gesture, 0, 50)
        .await
        .unwrap();

    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0]["sessionId"], "s-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_a_source_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/gaze-game/subject/c-1/history?page=0&size=50")
        .with_status(503)
        .create_async()
        .await;

    let source = HttpSessionSource::new(config_for(&server));
    match source.fetch_history("c-1", GameType::Gaze, 0, 50).await {
        Err(Error::Source { game, reason }) => {
            assert_eq!(game, GameType::Gaze);
            assert!(reason.contains("503"));
        }
        other => panic!("expected Source error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn service_path_overrides_reroute_requests() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/internal/dance/subject/c-1/history?page=0&size=50")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "content": [], "totalPages": 0, "totalElements": 0 }"#)
        .create_async()
        .await;

    let mut config = config_for(&server);
    config
        .service_paths
        .insert("dance-doodle".to_string(), "internal/dance".to_string());
    let source = HttpSessionSource::new(config);

    let page = source
        .fetch_history("c-1", GameType::DanceDoodle, 0, 50)
        .await
        .unwrap();
    assert!(page.content.is_empty());
    mock.assert_async().await;
}
