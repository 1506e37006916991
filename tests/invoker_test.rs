//! Live-invocation behavior against a local mock server.

use std::time::Duration;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use apidox::docs::{Endpoint, HttpMethod, Parameter, ParameterKind, ParameterLocation};
use apidox::invoker::{TestInput, TestInvoker};

fn invoker() -> TestInvoker {
    TestInvoker::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_invoke_substitutes_route_and_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/42"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 42})))
        .mount(&server)
        .await;

    let mut endpoint = Endpoint::new(
        "Get user",
        HttpMethod::Get,
        &format!("{}/users/{{id}}", server.uri()),
    );
    endpoint.parameters = vec![
        Parameter::new("id", "1", ParameterLocation::Route),
        Parameter::new("page", "1", ParameterLocation::Query),
    ];

    let mut input = TestInput::new();
    input.set(ParameterLocation::Route, "id", "42");
    input.set(ParameterLocation::Query, "page", "3");

    let report = invoker().invoke(&endpoint, &input).await;

    assert_eq!(report.status, Some(200));
    assert!(report.error.is_none());
    assert_eq!(report.band, Some("success"));
    assert_eq!(report.display.unwrap().label, "200 OK");
    // JSON bodies come back pretty-printed
    assert_eq!(report.body, "{\n    \"id\": 42\n}");
}

#[tokio::test]
async fn test_invoke_coerces_body_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({
            "name": "Ada",
            "age": 36.0,
            "active": false
        })))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let mut endpoint = Endpoint::new(
        "Create user",
        HttpMethod::Post,
        &format!("{}/users", server.uri()),
    );
    endpoint.parameters = vec![
        Parameter::new("name", "Ada", ParameterLocation::Body),
        Parameter {
            kind: ParameterKind::Number,
            ..Parameter::new("age", "36", ParameterLocation::Body)
        },
        Parameter {
            kind: ParameterKind::Boolean,
            ..Parameter::new("active", "0", ParameterLocation::Body)
        },
    ];

    let report = invoker().invoke(&endpoint, &TestInput::new()).await;
    assert_eq!(report.status, Some(201));
}

#[tokio::test]
async fn test_invoke_attaches_bearer_only_when_required() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut endpoint = Endpoint::new(
        "Secure",
        HttpMethod::Get,
        &format!("{}/secure", server.uri()),
    );
    endpoint.auth_required = true;

    let mut input = TestInput::new();
    input.token = Some("secret".to_string());

    let report = invoker().invoke(&endpoint, &input).await;
    assert_eq!(report.status, Some(200));

    // Same token without authRequired must not be attached; the mock above
    // only matches requests carrying the header, so this one misses it.
    endpoint.auth_required = false;
    let report = invoker().invoke(&endpoint, &input).await;
    assert_eq!(report.status, Some(404));
    assert_eq!(report.band, Some("warning"));
}

#[tokio::test]
async fn test_invoke_sends_headers_as_strings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/traced"))
        .and(header("X-Trace", "abc"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut endpoint = Endpoint::new(
        "Traced",
        HttpMethod::Get,
        &format!("{}/traced", server.uri()),
    );
    endpoint
        .parameters
        .push(Parameter::new("X-Trace", "abc", ParameterLocation::Header));

    let report = invoker().invoke(&endpoint, &TestInput::new()).await;
    assert_eq!(report.status, Some(204));
}

#[tokio::test]
async fn test_network_failure_shapes_into_report() {
    // Nothing listens on this port
    let endpoint = Endpoint::new(
        "Unreachable",
        HttpMethod::Get,
        "http://127.0.0.1:1/nothing",
    );

    let report = invoker().invoke(&endpoint, &TestInput::new()).await;

    assert!(report.error.is_some());
    assert_eq!(report.status, None);
    assert!(report.display.is_none());
    assert!(report.body.is_empty());
}

#[tokio::test]
async fn test_plain_text_body_kept_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/text"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let endpoint = Endpoint::new("Text", HttpMethod::Get, &format!("{}/text", server.uri()));

    let report = invoker().invoke(&endpoint, &TestInput::new()).await;
    assert_eq!(report.status, Some(500));
    assert_eq!(report.band, Some("danger"));
    assert_eq!(report.body, "boom");
}
