//! C# (System.Net.Http) backend

use crate::generation::builders::{CodeBuilder, body_json, endpoint_with_query, headers_with_auth, indent_json};
use crate::generation::{GeneratedCode, HighlightStyle, RequestIr};

/// Emits a C# example using `HttpClient`
pub struct CSharpBuilder;

impl CSharpBuilder {
    /// `GET` → `GetAsync`, `POST` → `PostAsync`, ...
    fn method_call(ir: &RequestIr) -> String {
        let lower = ir.method.as_str().to_lowercase();
        let mut chars = lower.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        format!("{capitalized}Async")
    }
}

impl CodeBuilder for CSharpBuilder {
    fn generate(&self, ir: &RequestIr) -> GeneratedCode {
        let mut cs = String::from("// C# HTTP request using HttpClient\n\n");
        cs.push_str("using System;\n");
        cs.push_str("using System.Net.Http;\n");
        cs.push_str("using System.Net.Http.Headers;\n");
        cs.push_str("using System.Threading.Tasks;\n\n");

        cs.push_str("public class ApiRequest {\n\n");
        cs.push_str("    public static async Task Main(string[] args) {\n");
        cs.push_str("        using (var client = new HttpClient()) {\n");
        cs.push_str(&format!(
            "            var endpoint = \"{}\";\n",
            endpoint_with_query(ir)
        ));

        for (name, value) in headers_with_auth(ir, "Bearer YOUR_API_TOKEN") {
            cs.push_str(&format!(
                "            client.DefaultRequestHeaders.Add(\"{name}\", \"{value}\");\n"
            ));
        }

        let body = body_json(ir);
        if let Some(body) = &body {
            // Verbatim string: embedded quotes are doubled
            let verbatim = indent_json(body, 16).replace('"', "\"\"");
            cs.push_str("            var content = new StringContent(\n");
            cs.push_str(&format!("                @\"{verbatim}\",\n"));
            cs.push_str("                System.Text.Encoding.UTF8,\n");
            cs.push_str("                \"application/json\"\n");
            cs.push_str("            );\n");
        }

        cs.push_str(&format!(
            "            var response = await client.{}(endpoint",
            Self::method_call(ir)
        ));
        if body.is_some() {
            cs.push_str(", content");
        }
        cs.push_str(");\n");

        cs.push_str("            var responseBody = await response.Content.ReadAsStringAsync();\n");
        cs.push_str("            Console.WriteLine(responseBody);\n");
        cs.push_str("        }\n");
        cs.push_str("    }\n");
        cs.push_str("}\n");

        GeneratedCode {
            style: HighlightStyle::Php,
            code: cs,
        }
    }
}
