//! Go (net/http) backend

use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, headers_with_auth, indent_json};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a Go example using the `net/http` package
pub struct GoBuilder;

impl CodeBuilder for GoBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut go = String::from("// Go HTTP request using net/http\n\n");
        go.push_str("package main\n\n");
        go.push_str("import (\n");
        go.push_str("    \"bytes\"\n");
        go.push_str("    \"fmt\"\n");
        go.push_str("    \"io\"\n");
        go.push_str("    \"net/http\"\n");
        go.push_str(")\n\n");

        go.push_str("func main() {\n");
        go.push_str(&format!("    url := \"{}\"\n", endpoint_with_query(ir)));

        if let Some(body) = body_json(ir) {
            go.push_str(&format!(
                "    requestBody := []byte(`{}`)\n",
                indent_json(&body, 4)
            ));
        } else {
            go.push_str("    var requestBody []byte\n");
        }

        go.push_str(&format!(
            "    req, err := http.NewRequest(\"{}\", url, bytes.NewBuffer(requestBody))\n",
            ir.method
        ));
        go.push_str("    if err != nil {\n");
        go.push_str("        fmt.Println(\"Error creating request:\", err)\n");
        go.push_str("        return\n");
        go.push_str("    }\n\n");

        for (name, value) in headers_with_auth(ir, "Bearer YOUR_API_TOKEN") {
            go.push_str(&format!("    req.Header.Set(\"{name}\", \"{value}\")\n"));
        }

        go.push('\n');
        go.push_str("    client := &http.Client{}\n");
        go.push_str("    resp, err := client.Do(req)\n");
        go.push_str("    if err != nil {\n");
        go.push_str("        fmt.Println(\"Error sending request:\", err)\n");
        go.push_str("        return\n");
        go.push_str("    }\n");
        go.push_str("    defer resp.Body.Close()\n\n");

        go.push_str("    body, err := io.ReadAll(resp.Body)\n");
        go.push_str("    if err != nil {\n");
        go.push_str("        fmt.Println(\"Error reading response body:\", err)\n");
        go.push_str("        return\n");
        go.push_str("    }\n\n");

        go.push_str("    fmt.Println(string(body))\n");
        go.push_str("}\n");

        GeneratedCode {
            style: HighlightStyle::Php,
            code: go,
        }
    }
}
