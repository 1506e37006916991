//! Generator backends.
//!
//! One module per target ecosystem, each conforming to [`CodeBuilder`]. The
//! helpers here implement the emission rules shared by every backend: the
//! required-only query string, Authorization synthesis, and the 4-space
//! pretty-printed JSON body.

pub mod csharp;
pub mod curl;
pub mod go;
pub mod java;
pub mod javascript;
pub mod laravel;
pub mod nodejs;
pub mod php;
pub mod rust;

use serde_json::Value as JsonValue;

use crate::docs::Parameter;
use crate::generation::{GeneratedCode, RequestIr};

/// A code generator backend for one target ecosystem.
///
/// Implementations are stateless and pure: identical inputs must produce
/// byte-identical output.
pub trait CodeBuilder: Send + Sync {
    /// Emit a runnable, self-contained snippet calling the described request
    fn generate(&self, ir: &RequestIr) -> GeneratedCode;
}

/// Name/value pair as embedded into emitted code
pub(crate) type HeaderPair = (String, String);

/// `application/x-www-form-urlencoded` query string of the required query
/// parameters, in author order. `None` when no query parameter is required.
///
/// Only required parameters are auto-appended to generated URLs; optional
/// ones are documented but never included.
pub(crate) fn required_query_string(query: &[Parameter]) -> Option<String> {
    let required: Vec<_> = query.iter().filter(|p| p.required).collect();
    if required.is_empty() {
        return None;
    }

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for param in required {
        serializer.append_pair(&param.name, &param.value);
    }
    Some(serializer.finish())
}

/// The endpoint URL with the required-query suffix applied
pub(crate) fn endpoint_with_query(ir: &RequestIr) -> String {
    match required_query_string(&ir.query) {
        Some(qs) => format!("{}?{}", ir.endpoint, qs),
        None => ir.endpoint.clone(),
    }
}

/// Whether a header named `Authorization` (any casing) is already supplied
pub(crate) fn has_authorization(headers: &[Parameter]) -> bool {
    headers
        .iter()
        .any(|h| h.name.eq_ignore_ascii_case("Authorization"))
}

/// Header name/value pairs, appending a synthetic Authorization header with
/// the backend's placeholder token when auth is required and none is supplied
pub(crate) fn headers_with_auth(ir: &RequestIr, placeholder: &str) -> Vec<HeaderPair> {
    let mut headers: Vec<HeaderPair> = ir
        .headers
        .iter()
        .map(|h| (h.name.clone(), h.value.clone()))
        .collect();

    if ir.auth_required && !has_authorization(&ir.headers) {
        headers.push(("Authorization".to_string(), placeholder.to_string()));
    }

    headers
}

/// Name→value object of the parameters, in author order; a later duplicate
/// name overwrites the value in place
pub(crate) fn param_object(params: &[Parameter]) -> JsonValue {
    let mut map = serde_json::Map::new();
    for param in params {
        map.insert(param.name.clone(), JsonValue::String(param.value.clone()));
    }
    JsonValue::Object(map)
}

/// Pretty-printed JSON with 4-space indentation
pub(crate) fn pretty_json(value: &JsonValue) -> String {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    serde::Serialize::serialize(value, &mut serializer)
        .unwrap_or_else(|_| unreachable!("JSON value serialization is infallible"));
    String::from_utf8(out).unwrap_or_default()
}

/// Pretty JSON of the body partition, only for body-carrying methods with a
/// non-empty body
pub(crate) fn body_json(ir: &RequestIr) -> Option<String> {
    if !ir.method.allows_body() || ir.body.is_empty() {
        return None;
    }
    Some(pretty_json(&param_object(&ir.body)))
}

/// Indent every continuation line of a multi-line string by `spaces`
pub(crate) fn indent_json(json: &str, spaces: usize) -> String {
    let indent = " ".repeat(spaces);
    json.lines().collect::<Vec<_>>().join(&format!("\n{indent}"))
}
