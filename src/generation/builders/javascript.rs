//! Browser JavaScript (fetch) backend

use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, headers_with_auth, indent_json};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a JavaScript example using the `fetch` API
pub struct JavascriptBuilder;

impl CodeBuilder for JavascriptBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut js = String::from("// JavaScript fetch request\n\n");

        js.push_str(&format!("const endpoint = '{}';\n", endpoint_with_query(ir)));
        js.push_str("const options = {\n");
        js.push_str(&format!("    method: '{}',\n", ir.method));

        let headers = headers_with_auth(ir, "Bearer ${API_TOKEN}");
        if !headers.is_empty() {
            js.push_str("    headers: {\n");
            let lines: Vec<String> = headers
                .iter()
                .map(|(name, value)| format!("        \"{name}\": \"{value}\""))
                .collect();
            js.push_str(&lines.join(",\n"));
            js.push_str("\n    },\n");
        }

        if let Some(body) = body_json(ir) {
            js.push_str(&format!("    body: {},\n", indent_json(&body, 4)));
        }

        js.push_str("};\n\n");
        js.push_str("fetch(endpoint, options)\n");
        js.push_str("    .then(response => response.json())\n");
        js.push_str("    .then(data => console.log(data))\n");
        js.push_str("    .catch(error => console.error('Error:', error));\n");

        GeneratedCode {
            style: HighlightStyle::Javascript,
            code: js,
        }
    }
}
