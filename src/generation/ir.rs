//! The backend-agnostic request representation.
//!
//! [`RequestIr`] is the normalized view of one endpoint that every code
//! generator consumes: method, auth flag, the resolved endpoint URL, and the
//! visibility-filtered header/query/body partitions. No target-language
//! syntax appears here.

use serde::{Deserialize, Serialize};

use crate::docs::visibility::active_in_location;
use crate::docs::{Endpoint, HttpMethod, Parameter, ParameterLocation};

/// Normalized request description consumed by every generator backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestIr {
    pub method: HttpMethod,
    pub auth_required: bool,
    /// Endpoint URL with active route placeholders already substituted
    pub endpoint: String,
    pub headers: Vec<Parameter>,
    pub query: Vec<Parameter>,
    pub body: Vec<Parameter>,
}

impl RequestIr {
    /// Project an endpoint into its generator-facing representation.
    ///
    /// Each partition keeps only currently active parameters, preserving
    /// author order. Active route parameters are substituted into the
    /// endpoint template as `{name}` tokens (braces stripped); tokens with
    /// no active parameter pass through unchanged.
    pub fn build(endpoint: &Endpoint) -> Self {
        let params = &endpoint.parameters;

        let route = active_in_location(params, ParameterLocation::Route);
        let mut resolved = endpoint.endpoint_template.clone();
        for param in &route {
            resolved = resolved.replace(&format!("{{{}}}", param.name), &param.value);
        }

        Self {
            method: endpoint.method,
            auth_required: endpoint.auth_required,
            endpoint: resolved,
            headers: owned(active_in_location(params, ParameterLocation::Header)),
            query: owned(active_in_location(params, ParameterLocation::Query)),
            body: owned(active_in_location(params, ParameterLocation::Body)),
        }
    }
}

fn owned(params: Vec<&Parameter>) -> Vec<Parameter> {
    params.into_iter().cloned().collect()
}
