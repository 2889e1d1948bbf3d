use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Json;
use serde_json::{json, Value};

use quill_core::suggestion::SuggestionType;
use quill_suggest::{HttpSuggestClient, SuggestError, SuggestResponse, SuggestionBackend};

// ============================================================================
// Helpers
// ============================================================================

/// Spawn `app` on an ephemeral local port and return its address.
async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn endpoint(addr: SocketAddr) -> String {
    format!("http://{}/suggest", addr)
}

async fn linspace_handler(Json(body): Json<Value>) -> Json<Value> {
    let code = body["code_context"].as_str().unwrap_or_default().to_string();
    Json(json!({
        "message": "OK",
        "suggestions": [
            {
                "name": "start",
                "type": ["int", "float"],
                "default_value": "",
                "description": "The starting value of the sequence.",
                "suggestions": ["a"]
            },
            {
                "name": "stop",
                "type": "int",
                "default_value": "",
                "description": code,
                "suggestions": []
            }
        ]
    }))
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_suggest_parses_response() {
    let addr = serve(Router::new().route("/suggest", post(linspace_handler))).await;
    let client = HttpSuggestClient::new(&endpoint(addr));

    let resp = client.suggest("import numpy as np\nnp.linspace(").await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("OK"));
    assert_eq!(resp.suggestions.len(), 2);

    let start = &resp.suggestions[0];
    assert_eq!(start.name, "start");
    assert_eq!(
        start.kind,
        SuggestionType::Union(vec!["int".to_string(), "float".to_string()])
    );
    assert!(start.default_value.is_none());
    assert_eq!(start.suggestions, vec!["a"]);
}

#[tokio::test]
async fn test_suggest_sends_entire_document() {
    let addr = serve(Router::new().route("/suggest", post(linspace_handler))).await;
    let client = HttpSuggestClient::new(&endpoint(addr));

    let code = "# happy coding!\nx = 1\nnp.linspace(";
    let resp = client.suggest(code).await.unwrap();
    assert_eq!(resp.suggestions[1].description.as_deref(), Some(code));
}

#[tokio::test]
async fn test_suggest_missing_suggestions_field_is_empty() {
    let app = Router::new().route(
        "/suggest",
        post(|| async { Json(json!({ "message": "nothing to suggest" })) }),
    );
    let addr = serve(app).await;
    let client = HttpSuggestClient::new(&endpoint(addr));

    let resp = client.suggest("x").await.unwrap();
    assert_eq!(
        resp,
        SuggestResponse {
            message: Some("nothing to suggest".to_string()),
            suggestions: vec![],
        }
    );
}

// ============================================================================
// Failure Path
// ============================================================================

#[tokio::test]
async fn test_suggest_http_error_is_status() {
    let app = Router::new().route(
        "/suggest",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "can't parse the function") }),
    );
    let addr = serve(app).await;
    let client = HttpSuggestClient::new(&endpoint(addr));

    match client.suggest("x").await {
        Err(SuggestError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("can't parse"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_suggest_invalid_json_is_decode_error() {
    let app = Router::new().route("/suggest", post(|| async { "server is up and running!" }));
    let addr = serve(app).await;
    let client = HttpSuggestClient::new(&endpoint(addr));

    assert!(matches!(
        client.suggest("x").await,
        Err(SuggestError::Decode(_))
    ));
}

#[tokio::test]
async fn test_suggest_unreachable_is_transport_error() {
    // Bind then drop to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpSuggestClient::new(&endpoint(addr));
    assert!(matches!(
        client.suggest("x").await,
        Err(SuggestError::Transport(_))
    ));
}

#[tokio::test]
async fn test_suggest_timeout() {
    let app = Router::new().route(
        "/suggest",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "suggestions": [] }))
        }),
    );
    let addr = serve(app).await;
    let client =
        HttpSuggestClient::with_timeout(&endpoint(addr), Some(Duration::from_millis(100))).unwrap();

    match client.suggest("x").await {
        Err(SuggestError::Transport(e)) => assert!(e.is_timeout()),
        other => panic!("Expected timeout, got {:?}", other),
    }
}

#[test]
fn test_client_debug_shows_endpoint() {
    let client = HttpSuggestClient::new(" http://127.0.0.1:5000/suggest ");
    assert_eq!(client.endpoint(), "http://127.0.0.1:5000/suggest");
    assert!(format!("{:?}", client).contains("127.0.0.1:5000"));
}
