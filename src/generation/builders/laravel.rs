//! Laravel HTTP client backend

use crate::generation::builders::php::php_array;
use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, has_authorization, indent_json, param_object, pretty_json};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a PHP example using Laravel's `Http` facade.
///
/// Authentication goes through `withToken()` rather than a synthesized
/// Authorization header.
pub struct LaravelBuilder;

impl CodeBuilder for LaravelBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut php =
            String::from("<?php\n\nuse Illuminate\\Support\\Facades\\Http;\n\n$response = Http::");

        let mut chained = false;
        if ir.auth_required && !has_authorization(&ir.headers) {
            php.push_str("withToken($apiToken)");
            chained = true;
        }

        if !ir.headers.is_empty() {
            let headers = pretty_json(&param_object(&ir.headers));
            php.push_str(&format!(
                "\n    ->withHeaders({})",
                php_array(&indent_json(&headers, 4))
            ));
            chained = true;
        }

        let verb = ir.method.as_str().to_lowercase();
        let endpoint = endpoint_with_query(ir);
        if chained {
            php.push_str(&format!("\n    ->{verb}('{endpoint}'"));
        } else {
            php.push_str(&format!("{verb}('{endpoint}'"));
        }

        if let Some(body) = body_json(ir) {
            php.push_str(&format!(
                ",\n        {}\n    ",
                php_array(&indent_json(&body, 8))
            ));
        }

        php.push_str(");\n\n// Output the response body\necho $response->body();\n");

        GeneratedCode {
            style: HighlightStyle::Php,
            code: php,
        }
    }
}
