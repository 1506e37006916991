//! PHP (Guzzle) backend

use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, headers_with_auth, indent_json};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a PHP example using the GuzzleHttp client
pub struct PhpBuilder;

/// Rewrite a JSON literal into PHP array syntax
pub(crate) fn php_array(json: &str) -> String {
    json.replace('{', "[").replace('}', "]").replace(':', " =>")
}

impl CodeBuilder for PhpBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut php = String::from("<?php\n\nuse GuzzleHttp\\Client;\n\n$client = new Client();\n\n");

        php.push_str(&format!(
            "$response = $client->request('{}', '{}', [\n",
            ir.method,
            endpoint_with_query(ir)
        ));

        let headers = headers_with_auth(ir, "Bearer $API_TOKEN");
        if !headers.is_empty() {
            php.push_str("    'headers' => [\n");
            for (name, value) in &headers {
                php.push_str(&format!("        '{name}' => '{value}',\n"));
            }
            php.push_str("    ],\n");
        }

        if let Some(body) = body_json(ir) {
            php.push_str(&format!(
                "    'body' => {},\n",
                php_array(&indent_json(&body, 4))
            ));
        }

        php.push_str("]);\n\necho $response->getBody();\n");

        GeneratedCode {
            style: HighlightStyle::Php,
            code: php,
        }
    }
}
