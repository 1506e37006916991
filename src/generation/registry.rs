//! Registry for generator backends.
//!
//! Backends are looked up by a string identifier so the embedding
//! application can extend the set at startup without touching the IR or the
//! resolver. The default set mirrors the identifiers stored in persisted
//! documents.

use std::sync::Arc;

use crate::config::DocsConfig;
use crate::docs::Endpoint;
use crate::generation::builders::{
    CodeBuilder, csharp::CSharpBuilder, curl::CurlBuilder, go::GoBuilder, java::JavaBuilder,
    javascript::JavascriptBuilder, laravel::LaravelBuilder, nodejs::NodeJsBuilder,
    php::PhpBuilder, rust::RustBuilder,
};
use crate::generation::{GeneratedCode, RequestIr};

/// Identifiers of the built-in backends, in presentation order
pub const DEFAULT_GENERATOR_IDS: [&str; 9] = [
    "cURL",
    "PHP",
    "Laravel",
    "Javascript",
    "NodeJS",
    "Java",
    "C#",
    "Go",
    "Rust",
];

/// Registry that manages generator backends keyed by identifier.
///
/// Insertion order is preserved so generation output is stable run to run.
pub struct GeneratorRegistry {
    builders: Vec<(String, Arc<dyn CodeBuilder>)>,
}

impl GeneratorRegistry {
    /// Create a new registry with the default backends
    pub fn new() -> Self {
        let mut registry = Self {
            builders: Vec::new(),
        };

        registry.register("cURL", Arc::new(CurlBuilder));
        registry.register("PHP", Arc::new(PhpBuilder));
        registry.register("Laravel", Arc::new(LaravelBuilder));
        registry.register("Javascript", Arc::new(JavascriptBuilder));
        registry.register("NodeJS", Arc::new(NodeJsBuilder));
        registry.register("Java", Arc::new(JavaBuilder));
        registry.register("C#", Arc::new(CSharpBuilder));
        registry.register("Go", Arc::new(GoBuilder));
        registry.register("Rust", Arc::new(RustBuilder));

        registry
    }

    /// Create a registry restricted to the identifiers a configuration enables
    pub fn from_config(config: &DocsConfig) -> Self {
        let mut registry = Self::new();
        if let Some(enabled) = &config.enabled_generators {
            registry
                .builders
                .retain(|(id, _)| enabled.iter().any(|e| e == id));
        }
        registry
    }

    /// Register a backend, replacing any previous one with the same identifier
    pub fn register(&mut self, id: &str, builder: Arc<dyn CodeBuilder>) {
        if let Some(slot) = self.builders.iter_mut().find(|(known, _)| known == id) {
            slot.1 = builder;
        } else {
            self.builders.push((id.to_string(), builder));
        }
    }

    /// Get a backend by identifier
    pub fn get(&self, id: &str) -> Option<Arc<dyn CodeBuilder>> {
        self.builders
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, builder)| Arc::clone(builder))
    }

    /// Check whether an identifier has a registered backend
    pub fn has_builder(&self, id: &str) -> bool {
        self.builders.iter().any(|(known, _)| known == id)
    }

    /// All registered identifiers, in registration order
    pub fn identifiers(&self) -> Vec<&str> {
        self.builders.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Generate snippets for every backend the endpoint requests.
    ///
    /// The IR is built once and shared. Requested identifiers with no
    /// registered backend are skipped silently; output follows registration
    /// order regardless of the order the author picked identifiers in.
    pub fn generate_requested(&self, endpoint: &Endpoint) -> Vec<(String, GeneratedCode)> {
        if endpoint.requested_generators.is_empty() {
            return Vec::new();
        }

        for requested in &endpoint.requested_generators {
            if !self.has_builder(requested) {
                tracing::debug!(generator = %requested, "requested generator not registered, skipping");
            }
        }

        let ir = RequestIr::build(endpoint);
        self.builders
            .iter()
            .filter(|(id, _)| endpoint.requested_generators.iter().any(|r| r == id))
            .map(|(id, builder)| (id.clone(), builder.generate(&ir)))
            .collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::HttpMethod;
    use crate::generation::HighlightStyle;

    #[test]
    fn test_default_registry_has_all_builders() {
        let registry = GeneratorRegistry::new();
        for id in DEFAULT_GENERATOR_IDS {
            assert!(registry.has_builder(id), "missing builder for {id}");
        }
        assert_eq!(registry.identifiers(), DEFAULT_GENERATOR_IDS.to_vec());
    }

    #[test]
    fn test_unknown_identifier_skipped_silently() {
        let registry = GeneratorRegistry::new();
        let mut endpoint = Endpoint::new("t", HttpMethod::Get, "https://api.example.com");
        endpoint.requested_generators = vec!["cURL".to_string(), "COBOL".to_string()];

        let generated = registry.generate_requested(&endpoint);
        assert_eq!(generated.len(), 1);
        assert_eq!(generated[0].0, "cURL");
    }

    #[test]
    fn test_no_requested_generators_yields_nothing() {
        let registry = GeneratorRegistry::new();
        let endpoint = Endpoint::new("t", HttpMethod::Get, "https://api.example.com");
        assert!(registry.generate_requested(&endpoint).is_empty());
    }

    #[test]
    fn test_output_follows_registration_order() {
        let registry = GeneratorRegistry::new();
        let mut endpoint = Endpoint::new("t", HttpMethod::Get, "https://api.example.com");
        endpoint.requested_generators = vec!["Rust".to_string(), "cURL".to_string()];

        let ids: Vec<_> = registry
            .generate_requested(&endpoint)
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["cURL".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn test_register_custom_builder() {
        struct EchoBuilder;
        impl CodeBuilder for EchoBuilder {
            fn generate(&self, ir: &RequestIr) -> GeneratedCode {
                GeneratedCode {
                    style: HighlightStyle::Json,
                    code: ir.endpoint.clone(),
                }
            }
        }

        let mut registry = GeneratorRegistry::new();
        registry.register("Echo", Arc::new(EchoBuilder));
        assert!(registry.has_builder("Echo"));

        let mut endpoint = Endpoint::new("t", HttpMethod::Get, "https://api.example.com");
        endpoint.requested_generators = vec!["Echo".to_string()];
        let generated = registry.generate_requested(&endpoint);
        assert_eq!(generated[0].1.code, "https://api.example.com");
    }

    #[test]
    fn test_from_config_restricts_defaults() {
        let config = DocsConfig {
            enabled_generators: Some(vec!["cURL".to_string(), "Go".to_string()]),
            ..DocsConfig::default()
        };
        let registry = GeneratorRegistry::from_config(&config);
        assert_eq!(registry.identifiers(), vec!["cURL", "Go"]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let registry = GeneratorRegistry::new();
        let mut endpoint = Endpoint::new("t", HttpMethod::Post, "https://api.example.com/users");
        endpoint.auth_required = true;
        endpoint.requested_generators =
            DEFAULT_GENERATOR_IDS.iter().map(|s| s.to_string()).collect();

        let first = registry.generate_requested(&endpoint);
        let second = registry.generate_requested(&endpoint);
        assert_eq!(first, second);
    }
}
