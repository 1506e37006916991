//! Collection → Postman export.
//!
//! The raw URL substitution mirrors the long-standing exporter behavior:
//! active query-parameter names are substituted directly into the endpoint
//! string (braces stripped per substitution) rather than appended as a `?`
//! query string. Files exported by earlier versions depend on this shape, so
//! it is preserved as-is.

use serde_json::Value as JsonValue;

use crate::docs::visibility::active_in_location;
use crate::docs::{Collection, Endpoint, Parameter, ParameterLocation};
use crate::error::Result;
use crate::generation::builders::{has_authorization, param_object, pretty_json};
use crate::postman::POSTMAN_SCHEMA_URL;
use crate::postman::types::{
    PostmanBody, PostmanCollection, PostmanInfo, PostmanItem, PostmanKeyValue, PostmanRequest,
    PostmanResponse, PostmanUrl,
};

/// Build the Postman document for a collection.
///
/// Endpoints without a non-empty endpoint template are excluded. Each call
/// assigns a fresh `_postman_id`.
pub fn to_postman_collection(collection: &Collection) -> PostmanCollection {
    let items = collection
        .endpoints
        .iter()
        .filter(|endpoint| !endpoint.endpoint_template.is_empty())
        .map(format_item)
        .collect();

    PostmanCollection {
        info: PostmanInfo {
            name: collection.title.clone(),
            postman_id: uuid::Uuid::new_v4().to_string(),
            description: collection.description.clone(),
            schema: POSTMAN_SCHEMA_URL.to_string(),
        },
        item: items,
    }
}

/// Export a collection as pretty-printed Postman JSON
pub fn to_postman_json(collection: &Collection) -> Result<String> {
    let document = to_postman_collection(collection);
    let value = serde_json::to_value(&document)?;
    Ok(pretty_json(&value))
}

/// Default download file name for an exported collection
pub fn export_file_name(title: &str) -> String {
    format!("{}_collection.json", title.replace(' ', "_"))
}

fn format_item(endpoint: &Endpoint) -> PostmanItem {
    let params = &endpoint.parameters;
    let raw = format_raw_url(&endpoint.endpoint_template, params);
    let (host, path) = host_and_path(&endpoint.endpoint_template);

    PostmanItem {
        name: endpoint.title.clone(),
        request: PostmanRequest {
            method: endpoint.method.to_string(),
            header: format_headers(params, endpoint.auth_required),
            url: PostmanUrl {
                raw,
                host,
                path,
                query: active_in_location(params, ParameterLocation::Query)
                    .into_iter()
                    .map(|p| PostmanKeyValue::new(&p.name, &p.value))
                    .collect(),
            },
            body: Some(format_body(params)),
            description: None,
        },
        response: endpoint
            .responses
            .iter()
            .map(|response| PostmanResponse {
                name: response.title.clone(),
                status: response.title.clone(),
                code: Some(response.status_code),
                body: JsonValue::String(response.body.clone()),
                description: None,
                header: vec![PostmanKeyValue::new("Content-Type", "application/json")],
            })
            .collect(),
    }
}

fn format_headers(params: &[Parameter], auth_required: bool) -> Vec<PostmanKeyValue> {
    let active: Vec<Parameter> = active_in_location(params, ParameterLocation::Header)
        .into_iter()
        .cloned()
        .collect();
    let mut headers: Vec<PostmanKeyValue> = active
        .iter()
        .map(|p| PostmanKeyValue::new(&p.name, &p.value))
        .collect();

    if auth_required && !has_authorization(&active) {
        headers.push(PostmanKeyValue::new("Authorization", "Bearer $API_TOKEN"));
    }

    headers
}

// Active query parameters substitute into the raw endpoint string; every
// substitution also strips all brace characters.
fn format_raw_url(endpoint: &str, params: &[Parameter]) -> String {
    let mut raw = endpoint.to_string();
    for param in active_in_location(params, ParameterLocation::Query) {
        raw = raw
            .replace(&param.name, &param.value)
            .replace('{', "")
            .replace('}', "");
    }
    raw
}

fn format_body(params: &[Parameter]) -> PostmanBody {
    let body: Vec<Parameter> = active_in_location(params, ParameterLocation::Body)
        .into_iter()
        .cloned()
        .collect();

    PostmanBody {
        mode: "raw".to_string(),
        raw: pretty_json(&param_object(&body)),
    }
}

// Scheme-agnostic host/path split; brace placeholders are kept literal.
fn host_and_path(endpoint: &str) -> (Vec<String>, Vec<String>) {
    let without_scheme = endpoint
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(endpoint);
    let without_suffix = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or(without_scheme);

    match without_suffix.split_once('/') {
        Some((host, path)) => {
            let segments = path
                .trim_matches('/')
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            (vec![host.to_string()], segments)
        }
        None => (vec![without_suffix.to_string()], Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::{HttpMethod, ResponseExample, Visibility};

    fn sample_collection() -> Collection {
        let mut endpoint = Endpoint::new(
            "List users",
            HttpMethod::Get,
            "https://api.example.com/users/{id}",
        );
        endpoint.auth_required = true;
        endpoint.parameters = vec![
            Parameter::new("Accept", "application/json", ParameterLocation::Header),
            Parameter::new("page", "2", ParameterLocation::Query),
            Parameter::new("name", "Ada", ParameterLocation::Body),
        ];
        endpoint.responses = vec![ResponseExample {
            status_code: 200,
            title: "OK".to_string(),
            description: String::new(),
            body: "{\"id\": 1}".to_string(),
            display_icon: "check-circle".to_string(),
            display_color: "teal".to_string(),
        }];

        let mut collection = Collection::new("Demo API", "demo");
        collection.endpoints.push(endpoint);
        collection
    }

    #[test]
    fn test_info_block() {
        let document = to_postman_collection(&sample_collection());
        assert_eq!(document.info.name, "Demo API");
        assert_eq!(document.info.schema, POSTMAN_SCHEMA_URL);
        assert!(uuid::Uuid::parse_str(&document.info.postman_id).is_ok());
    }

    #[test]
    fn test_fresh_postman_id_per_export() {
        let collection = sample_collection();
        let first = to_postman_collection(&collection);
        let second = to_postman_collection(&collection);
        assert_ne!(first.info.postman_id, second.info.postman_id);
    }

    #[test]
    fn test_headers_with_synthesized_auth() {
        let document = to_postman_collection(&sample_collection());
        let headers = &document.item[0].request.header;
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].key, "Accept");
        assert_eq!(headers[1].key, "Authorization");
        assert_eq!(headers[1].value, "Bearer $API_TOKEN");
    }

    #[test]
    fn test_existing_authorization_not_duplicated() {
        let mut collection = sample_collection();
        collection.endpoints[0].parameters.push(Parameter::new(
            "authorization",
            "Bearer abc",
            ParameterLocation::Header,
        ));

        let document = to_postman_collection(&collection);
        let auth_headers: Vec<_> = document.item[0]
            .request
            .header
            .iter()
            .filter(|h| h.key.eq_ignore_ascii_case("authorization"))
            .collect();
        assert_eq!(auth_headers.len(), 1);
    }

    #[test]
    fn test_raw_url_query_substitution_strips_braces() {
        // Historical exporter behavior: query params substitute into the raw
        // string by name; no `?` suffix is produced.
        let document = to_postman_collection(&sample_collection());
        let url = &document.item[0].request.url;
        assert_eq!(url.raw, "https://api.example.com/users/id");
        assert_eq!(url.host, vec!["api.example.com".to_string()]);
        assert_eq!(url.path, vec!["users".to_string(), "{id}".to_string()]);
        assert_eq!(url.query.len(), 1);
        assert_eq!(url.query[0].key, "page");
        assert_eq!(url.query[0].value, "2");
    }

    #[test]
    fn test_body_raw_json() {
        let document = to_postman_collection(&sample_collection());
        let body = document.item[0].request.body.clone().unwrap();
        assert_eq!(body.mode, "raw");
        assert_eq!(body.raw, "{\n    \"name\": \"Ada\"\n}");
    }

    #[test]
    fn test_inactive_params_excluded() {
        let mut collection = sample_collection();
        collection.endpoints[0].parameters.push(Parameter {
            visibility: Visibility::Conditionally,
            visibility_condition_param_name: Some("env".to_string()),
            visibility_condition_value: Some("prod".to_string()),
            ..Parameter::new("trace", "on", ParameterLocation::Query)
        });

        let document = to_postman_collection(&collection);
        let query = &document.item[0].request.url.query;
        assert!(query.iter().all(|q| q.key != "trace"));
    }

    #[test]
    fn test_endpoint_without_template_excluded() {
        let mut collection = sample_collection();
        collection
            .endpoints
            .push(Endpoint::new("Draft", HttpMethod::Get, ""));

        let document = to_postman_collection(&collection);
        assert_eq!(document.item.len(), 1);
    }

    #[test]
    fn test_response_mapping() {
        let document = to_postman_collection(&sample_collection());
        let response = &document.item[0].response[0];
        assert_eq!(response.name, "OK");
        // The exporter writes the title into both name and status
        assert_eq!(response.status, "OK");
        assert_eq!(response.code, Some(200));
        assert_eq!(response.header[0].key, "Content-Type");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Demo API"), "Demo_API_collection.json");
    }
}
