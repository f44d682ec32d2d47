use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leetstats::config::LeetCodeConfig;
use leetstats::error::FetchError;
use leetstats::leetcode::{LeetCodeClient, ProfileSource};
use leetstats::models::Scalar;

fn client_for(server: &MockServer) -> LeetCodeClient {
    LeetCodeClient::new(&LeetCodeConfig {
        graphql_url: format!("{}/graphql", server.uri()),
        user_agent: "leetstats-test".to_string(),
    })
}

#[tokio::test]
async fn sends_username_variable_and_decodes_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("User-Agent", "leetstats-test"))
        .and(body_partial_json(json!({ "variables": { "username": "alice" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "matchedUser": {
                    "username": "alice",
                    "profile": { "realName": "Alice A.", "ranking": 1500 },
                    "submitStats": {
                        "acSubmissionNum": [
                            { "difficulty": "All", "count": 162 },
                            { "difficulty": "Easy", "count": 100 },
                            { "difficulty": "Medium", "count": 50 },
                            { "difficulty": "Hard", "count": 12 }
                        ]
                    }
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client_for(&mock_server).fetch_stats("alice").await.expect("matched user");
    let profile = user.profile.unwrap();

    assert_eq!(user.username, Some(Scalar::Text("alice".into())));
    assert_eq!(profile.real_name, Some(Scalar::Text("Alice A.".into())));
    assert_eq!(profile.ranking, Some(Scalar::Int(1500)));
    assert_eq!(user.submit_stats.unwrap().ac_submission_num.unwrap().len(), 4);
}

#[tokio::test]
async fn off_type_fields_still_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "matchedUser": {
                    "username": "alice",
                    "profile": { "realName": null, "ranking": true },
                    "submitStats": {
                        "acSubmissionNum": [{ "difficulty": null, "count": 1 }]
                    }
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let user = client_for(&mock_server).fetch_stats("alice").await.expect("matched user");
    let profile = user.profile.unwrap();
    let entries = user.submit_stats.unwrap().ac_submission_num.unwrap();

    assert_eq!(profile.ranking, Some(Scalar::Other(json!(true))));
    assert_eq!(entries[0].difficulty, None);
    assert_eq!(entries[0].count, Some(Scalar::Int(1)));
}

#[tokio::test]
async fn null_matched_user_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "That user does not exist." }],
            "data": { "matchedUser": null }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.query_matched_user("ghost").await.unwrap().is_none());
    assert!(client.fetch_stats("ghost").await.is_none());
}

#[tokio::test]
async fn error_status_is_reported_then_collapsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match client.query_matched_user("alice").await {
        Err(FetchError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "slow down");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(client.fetch_stats("alice").await.is_none());
}

#[tokio::test]
async fn malformed_body_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(matches!(
        client.query_matched_user("alice").await,
        Err(FetchError::Transport(_))
    ));
    assert!(client.fetch_stats("alice").await.is_none());
}

#[tokio::test]
async fn missing_data_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Syntax Error" }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(matches!(
        client.query_matched_user("alice").await,
        Err(FetchError::MissingData)
    ));
}

#[tokio::test]
async fn unreachable_service_is_absent() {
    let client = LeetCodeClient::new(&LeetCodeConfig {
        graphql_url: "http://127.0.0.1:9/graphql".to_string(),
        user_agent: "leetstats-test".to_string(),
    });
    assert!(client.fetch_stats("alice").await.is_none());
}
