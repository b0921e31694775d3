//! Integration tests for the HTTP backend and the controller on top of it.
//!
//! Runs against a local mock server standing in for the MedAssist API.

use std::sync::Arc;
use std::time::Duration;

use medassist_chat::{
    ChatBackend, ChatRequest, ChatSessionController, ControllerOptions, DispatchError,
    FacilityType, FacilityView, HttpBackend, HttpBackendConfig, SessionInitError,
};
use medassist_common::SessionId;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn backend_for(server: &MockServer) -> Arc<HttpBackend> {
    Arc::new(HttpBackend::new(HttpBackendConfig::new(server.uri())))
}

async fn mount_session(server: &MockServer, id: &str) {
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sessionId": id })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn create_session_returns_backend_id() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    mount_session(&server, "sess-abc").await;

    let response = backend_for(&server).create_session().await.unwrap();
    assert_eq!(response.session_id, "sess-abc");
}

#[tokio::test]
async fn create_session_maps_http_failure() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = backend_for(&server).create_session().await.unwrap_err();
    assert_eq!(
        err,
        SessionInitError::Status {
            status: 503,
            body: "maintenance".into()
        }
    );
}

#[tokio::test]
async fn create_session_rejects_missing_id() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "wrong-key" })))
        .mount(&server)
        .await;

    let err = backend_for(&server).create_session().await.unwrap_err();
    assert!(matches!(err, SessionInitError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on port 9 (discard) on a typical test host.
    let backend = HttpBackend::new(
        HttpBackendConfig::new("http://127.0.0.1:9").with_connect_timeout(Duration::from_secs(2)),
    );
    let err = backend.create_session().await.unwrap_err();
    assert!(matches!(err, SessionInitError::Network(_)));
}

#[tokio::test]
async fn chat_posts_camel_case_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "sessionId": "sess-1",
            "message": "I have a fever",
            "location": ""
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "Drink fluids and rest." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = ChatRequest {
        session_id: SessionId::new("sess-1"),
        message: "I have a fever".into(),
        location: String::new(),
    };
    let response = backend_for(&server).chat(&request).await.unwrap();
    assert_eq!(response.response, "Drink fluids and rest.");
    assert!(response.data.is_none());
}

#[tokio::test]
async fn chat_maps_server_error_and_bad_payload() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let request = ChatRequest {
        session_id: SessionId::new("sess-1"),
        message: "hello".into(),
        location: String::new(),
    };

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(1000)))
        .mount(&server)
        .await;
    let err = backend_for(&server).chat(&request).await.unwrap_err();
    match err {
        DispatchError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body.len(), 200);
        }
        other => panic!("expected status error, got {other:?}"),
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let err = backend_for(&server).chat(&request).await.unwrap_err();
    assert!(matches!(err, DispatchError::Malformed(_)));
}

#[tokio::test]
async fn full_conversation_against_mock_backend() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    mount_session(&server, "sess-xyz").await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "sessionId": "sess-xyz",
            "message": "Any hospitals nearby?",
            "location": "Chicago"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Here are two options.",
            "data": { "clinics": [
                { "name": "Lakeside Hospital", "type": "hospital", "address": "10 Shore Dr",
                  "lat": 41.88, "lon": -87.62 },
                { "type": "pharmacy" }
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctl = ChatSessionController::start(backend_for(&server), ControllerOptions::default())
        .await
        .unwrap();
    assert_eq!(ctl.session().id().as_str(), "sess-xyz");

    // Gate holds the question back until a location is known.
    assert!(ctl.send("Any hospitals nearby?").await.is_err());
    assert_eq!(ctl.log().len(), 1);

    ctl.set_location("Chicago");
    ctl.send("Any hospitals nearby?").await.unwrap();

    let snapshot = ctl.snapshot();
    assert_eq!(snapshot.messages.len(), 4);
    assert_eq!(snapshot.messages[3].text, "Here are two options.");
    match snapshot.facilities.view() {
        FacilityView::Expanded(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].kind, FacilityType::Hospital);
            assert_eq!(
                entries[0].directions_url().as_deref(),
                Some("https://www.google.com/maps/dir/?api=1&destination=41.88,-87.62")
            );
            assert_eq!(entries[1].display_name(), "Unnamed Facility");
        }
        other => panic!("expected expanded list, got {other:?}"),
    }
}

#[tokio::test]
async fn backend_outage_mid_conversation_is_absorbed() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    mount_session(&server, "sess-1").await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut ctl = ChatSessionController::start(backend_for(&server), ControllerOptions::default())
        .await
        .unwrap();
    ctl.send("I have a fever").await.unwrap();

    assert_eq!(ctl.log().len(), 3);
    assert_eq!(
        ctl.log().messages()[2].text,
        "Sorry, I'm having trouble connecting. Please try again."
    );
    assert!(!ctl.awaiting_response());
}

#[tokio::test]
async fn slow_backend_hits_dispatch_timeout() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    mount_session(&server, "sess-1").await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "too late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let options =
        ControllerOptions::default().with_dispatch_timeout(Some(Duration::from_millis(100)));
    let mut ctl = ChatSessionController::start(backend_for(&server), options)
        .await
        .unwrap();

    let outcome = ctl.submit("I have a fever").unwrap().run().await;
    assert!(matches!(outcome.result, Err(DispatchError::Timeout(_))));
    ctl.resolve(outcome);
    assert_eq!(ctl.log().len(), 3);
    assert!(!ctl.awaiting_response());
}
