use httpmock::prelude::*;
use iss_flyover::config::toml_config::EndpointConfig;
use iss_flyover::{
    next_passes_for_my_location, FlyoverConfig, FlyoverError, HttpFlyoverEngine, PassWindow,
};
use tokio_test::{assert_err, assert_ok};

const MY_IP: &str = "162.245.144.188";

fn config_for(ip: String, geolocation: String, passes: String) -> FlyoverConfig {
    let mut config = FlyoverConfig::default();
    config.endpoints = EndpointConfig {
        ip,
        geolocation,
        passes,
    };
    config.http.timeout_seconds = 5;
    config
}

fn mock_config(server: &MockServer) -> FlyoverConfig {
    config_for(
        server.url("/ip?format=json"),
        server.url("/json/{ip}"),
        server.url("/iss/json/?lat={latitude}&lon={longitude}"),
    )
}

#[tokio::test]
async fn test_chain_returns_passes_for_current_location() {
    let server = MockServer::start();

    let ip_mock = server.mock(|when, then| {
        when.method(GET).path("/ip").query_param("format", "json");
        then.status(200).json_body(serde_json::json!({"ip": MY_IP}));
    });

    let geo_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/json/{}", MY_IP));
        then.status(200).json_body(serde_json::json!({
            "ip": MY_IP,
            "latitude": "49.27670",
            "longitude": "-123.13000"
        }));
    });

    let passes_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/iss/json/")
            .query_param("lat", "49.27670")
            .query_param("lon", "-123.13000");
        then.status(200).json_body(serde_json::json!({
            "message": "success",
            "response": [{"risetime": 134564234, "duration": 600}]
        }));
    });

    let passes = assert_ok!(next_passes_for_my_location(&mock_config(&server)).await);

    ip_mock.assert();
    geo_mock.assert();
    passes_mock.assert();
    assert_eq!(passes, vec![PassWindow::new(134564234, 600)]);
}

#[tokio::test]
async fn test_ip_lookup_failure_stops_the_chain() {
    let server = MockServer::start();

    let ip_mock = server.mock(|when, then| {
        when.method(GET).path("/ip");
        then.status(500).body("server error");
    });
    let geo_mock = server.mock(|when, then| {
        when.method(GET).path_contains("/json/");
        then.status(200).json_body(serde_json::json!({"latitude": "0", "longitude": "0"}));
    });
    let passes_mock = server.mock(|when, then| {
        when.method(GET).path("/iss/json/");
        then.status(200).json_body(serde_json::json!({"response": []}));
    });

    let engine = HttpFlyoverEngine::from_config(&mock_config(&server)).unwrap();
    let err = assert_err!(engine.get_upcoming_passes().await);

    ip_mock.assert();
    geo_mock.assert_hits(0);
    passes_mock.assert_hits(0);

    match &err {
        FlyoverError::Upstream { status, body, .. } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "server error");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
    assert!(err.to_string().contains("server error"));
}

#[tokio::test]
async fn test_geolocation_transport_failure_stops_the_chain() {
    let server = MockServer::start();

    let ip_mock = server.mock(|when, then| {
        when.method(GET).path("/ip");
        then.status(200).json_body(serde_json::json!({"ip": MY_IP}));
    });
    let passes_mock = server.mock(|when, then| {
        when.method(GET).path("/iss/json/");
        then.status(200).json_body(serde_json::json!({"response": []}));
    });

    // 沒有服務在監聽的埠，連線會被拒絕
    let config = config_for(
        server.url("/ip"),
        "http://127.0.0.1:1/json/{ip}".to_string(),
        server.url("/iss/json/?lat={latitude}&lon={longitude}"),
    );

    let err = assert_err!(next_passes_for_my_location(&config).await);

    ip_mock.assert();
    passes_mock.assert_hits(0);
    assert!(err.is_transport());
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_pass_service_error_is_surfaced_unchanged() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/ip");
        then.status(200).json_body(serde_json::json!({"ip": MY_IP}));
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/json/{}", MY_IP));
        then.status(200)
            .json_body(serde_json::json!({"latitude": 49.2767, "longitude": -123.13}));
    });
    let passes_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/iss/json/")
            .query_param("lat", "49.2767")
            .query_param("lon", "-123.13");
        then.status(503).body("Service Unavailable");
    });

    let err = assert_err!(next_passes_for_my_location(&mock_config(&server)).await);

    passes_mock.assert();
    assert_eq!(err.status(), Some(503));
    assert_eq!(
        err.to_string(),
        "Status Code 503 when fetching Flyover Times for coordinates. Response: Service Unavailable"
    );
}

#[tokio::test]
async fn test_extra_pass_fields_and_order_are_preserved() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/ip");
        then.status(200).json_body(serde_json::json!({"ip": MY_IP}));
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/json/{}", MY_IP));
        then.status(200)
            .json_body(serde_json::json!({"latitude": "1.5", "longitude": "2.5"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/iss/json/");
        then.status(200).json_body(serde_json::json!({
            "response": [
                {"risetime": 200, "duration": 30, "max_elevation": 41},
                {"risetime": 100, "duration": 60}
            ]
        }));
    });

    let passes = assert_ok!(next_passes_for_my_location(&mock_config(&server)).await);

    assert_eq!(passes.len(), 2);
    assert_eq!(passes[0].risetime, 200);
    assert_eq!(passes[0].extra.get("max_elevation"), Some(&serde_json::json!(41)));
    assert_eq!(passes[1].risetime, 100);
}

#[tokio::test]
async fn test_independent_invocations_run_concurrently() {
    let server = MockServer::start();

    let ip_mock = server.mock(|when, then| {
        when.method(GET).path("/ip");
        then.status(200).json_body(serde_json::json!({"ip": MY_IP}));
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/json/{}", MY_IP));
        then.status(200)
            .json_body(serde_json::json!({"latitude": "49.27670", "longitude": "-123.13000"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/iss/json/");
        then.status(200)
            .json_body(serde_json::json!({"response": [{"risetime": 1, "duration": 2}]}));
    });

    let config = mock_config(&server);
    let (first, second) = tokio::join!(
        next_passes_for_my_location(&config),
        next_passes_for_my_location(&config)
    );

    assert_eq!(assert_ok!(first), assert_ok!(second));
    ip_mock.assert_hits(2);
}
