//! Java (java.net.http) backend

use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, headers_with_auth};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a Java example using `java.net.http.HttpClient`
pub struct JavaBuilder;

impl CodeBuilder for JavaBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut java = String::from("// Java HTTP request using HttpClient\n\n");
        java.push_str("import java.net.URI;\n");
        java.push_str("import java.net.http.HttpClient;\n");
        java.push_str("import java.net.http.HttpRequest;\n");
        java.push_str("import java.net.http.HttpResponse;\n");
        java.push_str("import java.net.http.HttpRequest.BodyPublishers;\n");
        java.push_str("import java.net.http.HttpResponse.BodyHandlers;\n\n");

        java.push_str("public class ApiRequest {\n\n");
        java.push_str("    public static void main(String[] args) throws Exception {\n");
        java.push_str("        HttpClient client = HttpClient.newHttpClient();\n");
        java.push_str(&format!(
            "        String endpoint = \"{}\";\n",
            endpoint_with_query(ir)
        ));

        java.push_str("        HttpRequest.Builder requestBuilder = HttpRequest.newBuilder()\n");
        java.push_str("            .uri(URI.create(endpoint))\n");
        java.push_str(&format!("            .method(\"{}\", ", ir.method));

        // Body goes through a text block so the emitted class compiles
        if let Some(body) = body_json(ir) {
            java.push_str("BodyPublishers.ofString(\"\"\"\n");
            for line in body.lines() {
                java.push_str(&format!("                {line}\n"));
            }
            java.push_str("                \"\"\")");
        } else {
            java.push_str("BodyPublishers.noBody()");
        }
        java.push_str(");\n\n");

        for (name, value) in headers_with_auth(ir, "Bearer YOUR_API_TOKEN") {
            java.push_str(&format!(
                "        requestBuilder.header(\"{name}\", \"{value}\");\n"
            ));
        }

        java.push('\n');
        java.push_str("        HttpRequest request = requestBuilder.build();\n\n");
        java.push_str(
            "        HttpResponse<String> response = client.send(request, BodyHandlers.ofString());\n",
        );
        java.push_str("        System.out.println(response.body());\n");
        java.push_str("    }\n");
        java.push_str("}\n");

        GeneratedCode {
            style: HighlightStyle::Php,
            code: java,
        }
    }
}
