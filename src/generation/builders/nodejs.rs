//! Node.js (axios) backend

use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, headers_with_auth, indent_json};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a Node.js example using the `axios` library
pub struct NodeJsBuilder;

impl CodeBuilder for NodeJsBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut js = String::from("// Node.js request using axios\n\n");
        js.push_str("const axios = require('axios');\n\n");

        js.push_str(&format!("const endpoint = '{}';\n", endpoint_with_query(ir)));
        js.push_str("const options = {\n");
        js.push_str(&format!("    method: '{}',\n", ir.method));
        js.push_str("    url: endpoint,\n");

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
            js.push_str(&format!("    data: {},\n", indent_json(&body, 4)));
        }

        js.push_str("};\n\n");
        js.push_str("axios(options)\n");
        js.push_str("    .then(response => console.log(response.data))\n");
        js.push_str("    .catch(error => console.error('Error:', error));\n");

        GeneratedCode {
            style: HighlightStyle::Javascript,
            code: js,
        }
    }
}
