//! Shell/cURL command backend

use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, headers_with_auth, indent_json};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a `curl` command-line example
pub struct CurlBuilder;

impl CodeBuilder for CurlBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut curl = format!("curl -X {} \"{}\" \\\n", ir.method, endpoint_with_query(ir));

        for (name, value) in headers_with_auth(ir, "Bearer $API_TOKEN") {
            curl.push_str(&format!("    -H \"{name}: {value}\" \\\n"));
        }

        if let Some(body) = body_json(ir) {
            curl.push_str(&format!("    -d '{}'", indent_json(&body, 8)));
        } else {
            // No body: drop the trailing line continuation
            curl = curl.trim_end_matches([' ', '\\', '\n']).to_string();
        }

        GeneratedCode {
            style: HighlightStyle::Gdscript,
            code: curl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::{Endpoint, HttpMethod, Parameter, ParameterLocation};

    #[test]
    fn test_get_without_headers() {
        let endpoint = Endpoint::new("t", HttpMethod::Get, "https://api.example.com/users");
        let code = CurlBuilder.generate(&RequestIr::build(&endpoint)).code;
        assert_eq!(code, "curl -X GET \"https://api.example.com/users\"");
    }

    #[test]
    fn test_post_with_auth_and_body() {
        let mut endpoint = Endpoint::new(
            "Create user",
            HttpMethod::Post,
            "https://api.example.com/users/{id}",
        );
        endpoint.auth_required = true;
        let mut name = Parameter::new("name", "Ada", ParameterLocation::Body);
        name.required = true;
        endpoint.parameters = vec![
            Parameter::new("id", "42", ParameterLocation::Route),
            name,
        ];

        let generated = CurlBuilder.generate(&RequestIr::build(&endpoint));
        assert_eq!(generated.style, HighlightStyle::Gdscript);
        assert_eq!(
            generated.code,
            "curl -X POST \"https://api.example.com/users/42\" \\\n    \
             -H \"Authorization: Bearer $API_TOKEN\" \\\n    \
             -d '{\n            \"name\": \"Ada\"\n        }'"
        );
    }

    #[test]
    fn test_required_query_appended() {
        let mut endpoint = Endpoint::new("t", HttpMethod::Get, "https://api.example.com/users");
        let mut page = Parameter::new("page", "2", ParameterLocation::Query);
        page.required = true;
        endpoint.parameters = vec![
            page,
            Parameter::new("debug", "true", ParameterLocation::Query),
        ];

        let code = CurlBuilder.generate(&RequestIr::build(&endpoint)).code;
        assert!(code.contains("page=2"));
        assert!(!code.contains("debug=true"));
    }
}
