//! Rust (reqwest) backend

use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, headers_with_auth, indent_json};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a Rust example using the `reqwest` client
pub struct RustBuilder;

impl CodeBuilder for RustBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut rust = String::from("// Rust HTTP request using reqwest\n\n");
        rust.push_str("use reqwest::Client;\n");
        rust.push_str("use serde_json::json;\n");
        rust.push_str("use std::error::Error;\n\n");

        rust.push_str("#[tokio::main]\n");
        rust.push_str("async fn main() -> Result<(), Box<dyn Error>> {\n");
        rust.push_str("    let client = Client::new();\n");
        rust.push_str(&format!("    let url = \"{}\";\n", endpoint_with_query(ir)));

        rust.push_str(&format!(
            "    let request = client.{}(url)\n",
            ir.method.as_str().to_lowercase()
        ));

        for (name, value) in headers_with_auth(ir, "Bearer YOUR_API_TOKEN") {
            rust.push_str(&format!("        .header(\"{name}\", \"{value}\")\n"));
        }

        if let Some(body) = body_json(ir) {
            rust.push_str(&format!("        .json(&json!({}))\n", indent_json(&body, 8)));
        }

        rust.push_str("        .send()\n");
        rust.push_str("        .await?;\n\n");
        rust.push_str("    let response_text = request.text().await?;\n");
        rust.push_str("    println!(\"{}\", response_text);\n\n");
        rust.push_str("    Ok(())\n");
        rust.push_str("}\n");

        GeneratedCode {
            style: HighlightStyle::Php,
            code: rust,
        }
    }
}
