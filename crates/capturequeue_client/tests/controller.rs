use std::time::Duration;

use capturequeue_client::{
    ControllerError, ControllerSettings, HttpJobController, JobController, ReplaceQueueRequest,
};
use capturequeue_core::CaptureJob;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(base_url: String) -> ControllerSettings {
    ControllerSettings {
        base_url,
        ..ControllerSettings::default()
    }
}

#[tokio::test]
async fn fetch_status_decodes_the_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "xpId": 7,
                "currentJob": {
                    "status": "running",
                    "remaining": 3,
                    "total": 10,
                    "voltage": 5.0,
                    "current": 2.0,
                    "secondsLeft": 42
                },
                "queue": [{ "voltage": 1.0, "current": 0.1 }]
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let controller = HttpJobController::new(settings(server.uri())).expect("controller");
    let snapshot = controller.fetch_status().await.expect("fetch ok");

    assert_eq!(snapshot.xp_id, Some(7));
    let current = snapshot.current_job.expect("current job");
    assert_eq!(current.status, "running");
    assert_eq!(current.remaining, 3);
    assert_eq!(current.total, 10);
    assert_eq!(
        snapshot.queue,
        vec![CaptureJob {
            voltage: 1.0,
            current: 0.1
        }]
    );
}

#[tokio::test]
async fn fetch_status_maps_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let controller = HttpJobController::new(settings(server.uri())).expect("controller");
    let err = controller.fetch_status().await.unwrap_err();

    assert_eq!(err, ControllerError::HttpStatus(500));
}

#[tokio::test]
async fn fetch_status_maps_garbled_bodies_to_decode_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let controller = HttpJobController::new(settings(server.uri())).expect("controller");
    let err = controller.fetch_status().await.unwrap_err();

    assert!(matches!(err, ControllerError::Decode(_)));
}

#[tokio::test]
async fn fetch_status_times_out_on_a_slow_controller() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("{}", "application/json"),
        )
        .mount(&server)
        .await;

    let controller = HttpJobController::new(ControllerSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ControllerSettings::default()
    })
    .expect("controller");
    let err = controller.fetch_status().await.unwrap_err();

    assert_eq!(err, ControllerError::Timeout);
}

#[tokio::test]
async fn replace_queue_posts_the_exact_ordered_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/queue"))
        .and(body_json(serde_json::json!({
            "xpId": 7,
            "queue": [
                { "voltage": 2.0, "current": 0.2 },
                { "voltage": 1.0, "current": 0.1 }
            ],
            "species": "Danio rerio"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let controller = HttpJobController::new(settings(server.uri())).expect("controller");
    let request = ReplaceQueueRequest {
        xp_id: 7,
        queue: vec![
            CaptureJob {
                voltage: 2.0,
                current: 0.2,
            },
            CaptureJob {
                voltage: 1.0,
                current: 0.1,
            },
        ],
        species: "Danio rerio".to_string(),
    };

    controller.replace_queue(&request).await.expect("replace ok");
}

#[tokio::test]
async fn abort_all_posts_to_the_abort_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/abort"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let controller = HttpJobController::new(settings(server.uri())).expect("controller");
    controller.abort_all().await.expect("abort ok");
}
