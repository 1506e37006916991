//! Postman → Collection import.
//!
//! The mapping is lossy: every imported parameter is always-visible, route
//! placeholders stay embedded in the URL, and response display metadata is
//! reduced to success/failure based on the status code band.

use serde_json::Value as JsonValue;

use crate::config::DocsConfig;
use crate::docs::status::import_display;
use crate::docs::{
    Collection, Endpoint, HttpMethod, Parameter, ParameterLocation, ResponseExample,
};
use crate::error::{Error, Result};
use crate::generation::builders::pretty_json;
use crate::postman::types::{PostmanCollection, PostmanItem, PostmanResponse};

/// Parse a Postman Collection v2.1 JSON document into a [`Collection`].
///
/// The document must carry `info` and `item` at the top level; anything else
/// is rejected as not a Postman collection. Unsupported request methods fail
/// the whole import.
pub fn from_postman_collection(json: &str, config: &DocsConfig) -> Result<Collection> {
    let value: JsonValue = serde_json::from_str(json)
        .map_err(|e| Error::invalid_collection(format!("not valid JSON: {e}")))?;

    let Some(object) = value.as_object() else {
        return Err(Error::invalid_collection("top level is not an object"));
    };
    if !object.contains_key("info") || !object.contains_key("item") {
        return Err(Error::invalid_collection(
            "missing required `info` or `item` section",
        ));
    }

    let document: PostmanCollection = serde_json::from_value(value)
        .map_err(|e| Error::invalid_collection(e.to_string()))?;

    let title = if document.info.name.is_empty() {
        "Imported Collection".to_string()
    } else {
        document.info.name.clone()
    };

    let mut collection = Collection::new(&title, &document.info.description);
    collection.endpoints = document
        .item
        .iter()
        .map(|item| import_item(item, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(collection)
}

fn import_item(item: &PostmanItem, config: &DocsConfig) -> Result<Endpoint> {
    let request = &item.request;
    let method: HttpMethod = request.method.parse()?;

    let mut endpoint = Endpoint::new(&item.name, method, &request.url.raw);
    endpoint.description = request.description.clone().unwrap_or_default();
    endpoint.auth_required = request
        .header
        .iter()
        .any(|h| h.key.eq_ignore_ascii_case("Authorization"));
    endpoint.collapsed = true;
    endpoint.requested_generators = config.importer_generators.clone();

    for header in &request.header {
        let mut param = Parameter::new(&header.key, &header.value, ParameterLocation::Header);
        param.required = true;
        param.description = header.description.clone().unwrap_or_default();
        endpoint.parameters.push(param);
    }

    for query in &request.url.query {
        let mut param = Parameter::new(&query.key, &query.value, ParameterLocation::Query);
        param.required = query.required.unwrap_or(false);
        param.description = query.description.clone().unwrap_or_default();
        endpoint.parameters.push(param);
    }

    if let Some(body) = &request.body {
        endpoint.parameters.extend(import_body_params(&body.raw));
    }

    endpoint.responses = item.response.iter().map(import_response).collect();

    Ok(endpoint)
}

// Body fields come from the raw JSON text; a non-object (or unparsable) body
// imports as zero parameters.
fn import_body_params(raw: &str) -> Vec<Parameter> {
    let Ok(JsonValue::Object(map)) = serde_json::from_str::<JsonValue>(raw) else {
        return Vec::new();
    };

    map.iter()
        .map(|(key, value)| {
            let text = match value {
                JsonValue::String(s) => s.clone(),
                other => other.to_string(),
            };
            let mut param = Parameter::new(key, &text, ParameterLocation::Body);
            param.required = true;
            param
        })
        .collect()
}

fn import_response(response: &PostmanResponse) -> ResponseExample {
    let status_code = response.code.unwrap_or(200);
    let (icon, color) = import_display(status_code);

    let body = match &response.body {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => pretty_json(other),
    };

    ResponseExample {
        status_code,
        title: response.name.clone(),
        description: response.description.clone().unwrap_or_default(),
        body,
        display_icon: icon.to_string(),
        display_color: color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::Visibility;

    const SAMPLE: &str = r#"{
        "info": {
            "name": "Demo API",
            "_postman_id": "8f0c2e24-31a9-4f2e-9f0a-aaaaaaaaaaaa",
            "description": "demo",
            "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
        },
        "item": [
            {
                "name": "Create user",
                "request": {
                    "method": "POST",
                    "header": [
                        {"key": "authorization", "value": "Bearer abc"},
                        {"key": "Accept", "value": "application/json"}
                    ],
                    "url": {
                        "raw": "https://api.example.com/users?page=2",
                        "host": ["api.example.com"],
                        "path": ["users"],
                        "query": [{"key": "page", "value": "2", "required": true}]
                    },
                    "body": {"mode": "raw", "raw": "{\"name\": \"Ada\", \"age\": 36}"}
                },
                "response": [
                    {"name": "Created", "status": "Created", "code": 201, "body": "{}"},
                    {"name": "Invalid", "status": "Invalid", "code": 422, "body": "{}"}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_import_collection_fields() {
        let config = DocsConfig::default();
        let collection = from_postman_collection(SAMPLE, &config).unwrap();

        assert_eq!(collection.title, "Demo API");
        assert_eq!(collection.description, "demo");
        assert_eq!(collection.version, 1);
        assert!(collection.slug.is_some());
        assert_eq!(collection.endpoints.len(), 1);
    }

    #[test]
    fn test_import_endpoint_fields() {
        let config = DocsConfig::default();
        let collection = from_postman_collection(SAMPLE, &config).unwrap();
        let endpoint = &collection.endpoints[0];

        assert_eq!(endpoint.title, "Create user");
        assert_eq!(endpoint.method, HttpMethod::Post);
        assert_eq!(endpoint.endpoint_template, "https://api.example.com/users?page=2");
        assert!(endpoint.auth_required);
        assert!(endpoint.collapsed);
        assert_eq!(
            endpoint.requested_generators,
            config.importer_generators
        );
    }

    #[test]
    fn test_imported_params_always_visible() {
        let config = DocsConfig::default();
        let collection = from_postman_collection(SAMPLE, &config).unwrap();
        let params = &collection.endpoints[0].parameters;

        // 2 headers + 1 query + 2 body fields
        assert_eq!(params.len(), 5);
        assert!(params.iter().all(|p| p.visibility == Visibility::Always));

        let page = params.iter().find(|p| p.name == "page").unwrap();
        assert!(page.required);
        assert_eq!(page.location, ParameterLocation::Query);

        let age = params.iter().find(|p| p.name == "age").unwrap();
        assert_eq!(age.value, "36");
        assert_eq!(age.location, ParameterLocation::Body);
    }

    #[test]
    fn test_imported_body_fields_required() {
        let config = DocsConfig::default();
        let collection = from_postman_collection(SAMPLE, &config).unwrap();
        let params = &collection.endpoints[0].parameters;

        // Headers and body fields import as required
        for param in params.iter().filter(|p| p.location != ParameterLocation::Query) {
            assert!(param.required, "{} should be required", param.name);
        }
    }

    #[test]
    fn test_imported_responses_binary_display() {
        let config = DocsConfig::default();
        let collection = from_postman_collection(SAMPLE, &config).unwrap();
        let responses = &collection.endpoints[0].responses;

        assert_eq!(responses[0].status_code, 201);
        assert_eq!(responses[0].display_icon, "check-circle");
        assert_eq!(responses[0].display_color, "teal");

        assert_eq!(responses[1].status_code, 422);
        assert_eq!(responses[1].display_icon, "exclamation-triangle");
        assert_eq!(responses[1].display_color, "red");
    }

    #[test]
    fn test_missing_sections_rejected() {
        let config = DocsConfig::default();
        let err = from_postman_collection(r#"{"info": {}}"#, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidCollectionFormat(_)));

        let err = from_postman_collection(r#"[1, 2]"#, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidCollectionFormat(_)));

        let err = from_postman_collection("not json", &config).unwrap_err();
        assert!(matches!(err, Error::InvalidCollectionFormat(_)));
    }

    #[test]
    fn test_unsupported_method_rejected() {
        let json = SAMPLE.replace("\"POST\"", "\"TRACE\"");
        let config = DocsConfig::default();
        let err = from_postman_collection(&json, &config).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(_)));
    }

    #[test]
    fn test_empty_name_defaults() {
        let json = SAMPLE.replace("\"Demo API\"", "\"\"");
        let config = DocsConfig::default();
        let collection = from_postman_collection(&json, &config).unwrap();
        assert_eq!(collection.title, "Imported Collection");
    }
}
