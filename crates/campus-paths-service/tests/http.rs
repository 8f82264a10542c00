//! End-to-end tests of the HTTP surface over the fixture dataset.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;

use campus_paths_service::app;
use campus_paths_service_shared::test_utils::{fixture_buildings, fresh_state, test_state};
use campus_paths_service_shared::{PROBLEM_MISSING_BUILDINGS, PROBLEM_UNKNOWN_BUILDING};

fn server() -> TestServer {
    TestServer::new(app(test_state())).expect("test server starts")
}

#[tokio::test]
async fn root_says_hello() {
    let response = server().get("/").await;
    response.assert_status_ok();
    response.assert_text("Hello World!");
}

#[tokio::test]
async fn path_returns_route_with_directions() {
    let response = server()
        .get("/path")
        .add_query_param("start", fixture_buildings::CSE)
        .add_query_param("end", fixture_buildings::SUZ)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["cost"], 300.0);
    assert_eq!(body["start"]["x"], 100.0);
    assert_eq!(body["path"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["path"][0]["end"]["x"], 200.0);
    assert_eq!(body["directions"][1], "\tWalk 150 feet SE");
    assert_eq!(body["directions"][3], "Total distance: 300 feet");
}

#[tokio::test]
async fn path_accepts_post() {
    let response = server()
        .post("/path")
        .add_query_param("start", fixture_buildings::CSE)
        .add_query_param("end", fixture_buildings::KNE)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["cost"], 120.0);
}

#[tokio::test]
async fn unreachable_building_returns_sentinel() {
    let response = server()
        .get("/path")
        .add_query_param("start", fixture_buildings::CSE)
        .add_query_param("end", fixture_buildings::ODE)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["start"]["x"], -1.0);
    assert_eq!(body["start"]["y"], -1.0);
    assert_eq!(body["cost"], 0.0);
    assert_eq!(body["path"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn both_names_missing_is_a_teapot() {
    let response = server().get("/path").await;
    response.assert_status(StatusCode::IM_A_TEAPOT);

    let body: Value = response.json();
    assert_eq!(body["type"], PROBLEM_MISSING_BUILDINGS);
    assert_eq!(body["status"], 418);
}

#[tokio::test]
async fn one_name_missing_is_a_bad_request() {
    let response = server()
        .get("/path")
        .add_query_param("start", fixture_buildings::CSE)
        .add_query_param("end", "")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.header("content-type"),
        "application/problem+json"
    );
}

#[tokio::test]
async fn unknown_building_is_a_bad_request() {
    let response = server()
        .get("/path")
        .add_query_param("start", "CSX")
        .add_query_param("end", fixture_buildings::MGH)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["type"], PROBLEM_UNKNOWN_BUILDING);
    assert!(body["detail"].as_str().unwrap().contains("CSX"));
    assert!(body["instance"].as_str().is_some());
}

#[tokio::test]
async fn repeated_queries_hit_the_cache() {
    let state = fresh_state();
    let server = TestServer::new(app(state.clone())).expect("test server starts");

    for _ in 0..3 {
        server
            .get("/path")
            .add_query_param("start", fixture_buildings::KNE)
            .add_query_param("end", fixture_buildings::CSE)
            .await
            .assert_status_ok();
    }
    assert_eq!(state.map().solver_runs(), 1);
    assert_eq!(state.map().cached_routes(), 1);
}

#[tokio::test]
async fn buildings_lists_every_building() {
    for response in [server().get("/buildings").await, server().post("/buildings").await] {
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["buildings"].as_array().map(Vec::len), Some(5));
        assert_eq!(body["names"]["MGH"], "Mary Gates Hall");
        assert_eq!(body["buildings"][0]["shortName"], "CSE");
    }
}

#[tokio::test]
async fn request_id_is_echoed() {
    let response = server()
        .get("/buildings")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-me"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "trace-me");
}

#[tokio::test]
async fn problem_instance_matches_request_id() {
    let response = server()
        .get("/path")
        .add_query_param("start", "NOPE")
        .add_query_param("end", fixture_buildings::MGH)
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-42"),
        )
        .await;
    let body: Value = response.json();
    assert_eq!(body["instance"], "req-42");
}

#[tokio::test]
async fn health_endpoints_report_ok() {
    let server = server();
    server.get("/health/live").await.assert_status_ok();

    let ready = server.get("/health/ready").await;
    ready.assert_status_ok();
    let body: Value = ready.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["buildings_loaded"], 5);
}
