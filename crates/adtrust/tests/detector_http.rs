use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use adtrust::config::DetectorConfig;
use adtrust::trust::{DetectorClient, DetectorError, HttpDetectorClient, Verdict};

async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub serves");
    });
    addr
}

fn client_for(addr: SocketAddr, timeout: Duration) -> HttpDetectorClient {
    HttpDetectorClient::new(&DetectorConfig {
        base_url: format!("http://{addr}"),
        timeout,
    })
    .expect("client builds")
}

#[tokio::test]
async fn parses_all_three_detector_responses() {
    let router = Router::new()
        .route(
            "/detect/text",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["text"], "Buy now, limited offer!");
                Json(json!({
                    "ai_probability": 0.9,
                    "confidence": 0.75,
                    "model_version": "roberta-v1"
                }))
            }),
        )
        .route(
            "/detect/image",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["image_reference"], "https://cdn.example.com/x.png");
                Json(json!({
                    "ai_probability": 0.15,
                    "confidence": 0.6,
                    "model_version": "vit-v1"
                }))
            }),
        )
        .route(
            "/fact-check",
            post(|Json(_body): Json<Value>| async move {
                Json(json!({
                    "findings": [
                        {
                            "claim": "limited offer",
                            "verdict": "mixed",
                            "source": "factcheck.example.com"
                        }
                    ]
                }))
            }),
        );
    let addr = spawn_stub(router).await;
    let client = client_for(addr, Duration::from_secs(2));

    let text = client
        .detect_text("Buy now, limited offer!")
        .await
        .expect("text detection");
    assert_eq!(text.ai_probability, 0.9);
    assert_eq!(text.model_version, "roberta-v1");

    let image = client
        .detect_image("https://cdn.example.com/x.png")
        .await
        .expect("image detection");
    assert_eq!(image.ai_probability, 0.15);

    let report = client
        .check_facts("Buy now, limited offer!")
        .await
        .expect("fact check");
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].verdict, Verdict::Mixed);
}

#[tokio::test]
async fn non_success_status_maps_to_detector_error() {
    let router = Router::new().route(
        "/detect/text",
        post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn_stub(router).await;
    let client = client_for(addr, Duration::from_secs(2));

    let err = client
        .detect_text("some text")
        .await
        .expect_err("500 is an error");
    assert!(matches!(
        err,
        DetectorError::Status { status } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn slow_detector_times_out() {
    let router = Router::new().route(
        "/detect/text",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({
                "ai_probability": 0.1,
                "confidence": 0.75,
                "model_version": "roberta-v1"
            }))
        }),
    );
    let addr = spawn_stub(router).await;
    let client = client_for(addr, Duration::from_millis(200));

    let err = client
        .detect_text("some text")
        .await
        .expect_err("timeout is an error");
    assert!(matches!(err, DetectorError::Transport(source) if source.is_timeout()));
}
