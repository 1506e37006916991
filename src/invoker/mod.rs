//! Live endpoint test invoker.
//!
//! Sends a real HTTP request built from an [`Endpoint`] plus user-supplied
//! values, and shapes whatever comes back (including transport failures)
//! into a [`TestReport`]. Network errors never escape as `Err`; they are
//! reported in the `error` field so callers always get a renderable result.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::docs::status::{self, StatusDisplay};
use crate::docs::visibility::active_in_location;
use crate::docs::{Endpoint, HttpMethod, Parameter, ParameterKind, ParameterLocation};
use crate::error::Result;

/// User-supplied values for one test invocation.
///
/// Keys in the per-location maps may carry the `*` required marker that the
/// form layer appends to labels; it is stripped before lookup.
#[derive(Debug, Clone, Default)]
pub struct TestInput {
    /// Bearer token, attached only when the endpoint requires auth
    pub token: Option<String>,
    values: HashMap<ParameterLocation, HashMap<String, String>>,
}

impl TestInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value for a parameter in one location
    pub fn set(&mut self, location: ParameterLocation, name: &str, value: &str) {
        self.values
            .entry(location)
            .or_default()
            .insert(name.trim_end_matches('*').to_string(), value.to_string());
    }

    /// Supplied value for a parameter, falling back to its documented default
    fn resolve<'a>(&'a self, param: &'a Parameter) -> &'a str {
        self.values
            .get(&param.location)
            .and_then(|m| m.get(param.name.trim_end_matches('*')))
            .map(String::as_str)
            .unwrap_or(&param.value)
    }
}

/// Outcome of one live invocation
#[derive(Debug, Clone, Default)]
pub struct TestReport {
    pub status: Option<u16>,
    /// Label/color/icon for the status code, when a response arrived
    pub display: Option<StatusDisplay>,
    /// Band color (info/success/primary/warning/danger)
    pub band: Option<&'static str>,
    pub headers: Vec<(String, String)>,
    /// Response body, pretty-printed when it parses as JSON
    pub body: String,
    /// Transport-level failure, mutually exclusive with `status`
    pub error: Option<String>,
}

/// Issues live test requests for documented endpoints
#[derive(Debug, Clone)]
pub struct TestInvoker {
    client: reqwest::Client,
}

impl TestInvoker {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Send the request described by `endpoint` with `input`'s values.
    ///
    /// Route values substitute into the URL template; query and header
    /// values attach as strings; POST/PUT/PATCH attach the body partition
    /// as JSON with kind-coerced values.
    pub async fn invoke(&self, endpoint: &Endpoint, input: &TestInput) -> TestReport {
        let url = resolve_url(endpoint, input);
        debug!(method = %endpoint.method, %url, "invoking endpoint");

        let mut request = self.client.request(request_method(endpoint.method), &url);

        let query: Vec<(String, String)> =
            active_in_location(&endpoint.parameters, ParameterLocation::Query)
                .into_iter()
                .map(|p| (p.name.clone(), input.resolve(p).to_string()))
                .collect();
        if !query.is_empty() {
            request = request.query(&query);
        }

        for header in active_in_location(&endpoint.parameters, ParameterLocation::Header) {
            request = request.header(&header.name, input.resolve(header));
        }

        if endpoint.auth_required
            && let Some(token) = &input.token
        {
            request = request.bearer_auth(token);
        }

        if endpoint.method.allows_body() {
            let body = body_object(endpoint, input);
            if !body.is_empty() {
                request = request.json(&JsonValue::Object(body));
            }
        }

        match request.send().await {
            Ok(response) => shape_response(response).await,
            Err(err) => {
                warn!(%url, error = %err, "test invocation failed");
                TestReport {
                    error: Some(err.to_string()),
                    ..TestReport::default()
                }
            }
        }
    }
}

fn request_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Options => reqwest::Method::OPTIONS,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}

fn resolve_url(endpoint: &Endpoint, input: &TestInput) -> String {
    let mut url = endpoint.endpoint_template.clone();
    for param in active_in_location(&endpoint.parameters, ParameterLocation::Route) {
        url = url.replace(&format!("{{{}}}", param.name), input.resolve(param));
    }
    url
}

fn body_object(endpoint: &Endpoint, input: &TestInput) -> serde_json::Map<String, JsonValue> {
    let mut map = serde_json::Map::new();
    for param in active_in_location(&endpoint.parameters, ParameterLocation::Body) {
        map.insert(param.name.clone(), coerce(param, input.resolve(param)));
    }
    map
}

// Declared-kind coercion for body values. An unparsable number keeps the raw
// string so the request still goes out.
fn coerce(param: &Parameter, raw: &str) -> JsonValue {
    match param.kind {
        ParameterKind::String => JsonValue::String(raw.to_string()),
        ParameterKind::Boolean => JsonValue::Bool(raw != "false" && raw != "0"),
        ParameterKind::Number => match raw.parse::<f64>() {
            Ok(n) => serde_json::Number::from_f64(n)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(raw.to_string())),
            Err(_) => {
                warn!(name = %param.name, value = %raw, "number parameter is not numeric");
                JsonValue::String(raw.to_string())
            }
        },
    }
}

async fn shape_response(response: reqwest::Response) -> TestReport {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let text = response.text().await.unwrap_or_default();
    let body = match serde_json::from_str::<JsonValue>(&text) {
        Ok(value) => crate::generation::builders::pretty_json(&value),
        Err(_) => text,
    };

    TestReport {
        status: Some(status),
        display: Some(status::display(status)),
        band: Some(status::band_color(status)),
        headers,
        body,
        error: None,
    }
}
