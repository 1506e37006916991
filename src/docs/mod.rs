//! The documented-API data model.
//!
//! A [`Collection`] is the persisted system of record: a titled, versioned
//! list of [`Endpoint`]s, each describing one API operation with its
//! parameters, example responses, and the code generators requested for it.
//! The JSON shape round-trips exactly through serde; body and parameter
//! ordering is author insertion order.

pub mod status;
pub mod visibility;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::generation::HighlightStyle;

/// HTTP request methods supported by documented endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    /// Uppercase wire name, e.g. `POST`
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Whether generated snippets attach a JSON body for this method
    pub fn allows_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    /// All supported methods
    pub fn all() -> Vec<HttpMethod> {
        vec![
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
            HttpMethod::Options,
            HttpMethod::Head,
        ]
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "OPTIONS" => Ok(HttpMethod::Options),
            "HEAD" => Ok(HttpMethod::Head),
            _ => Err(Error::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Where a parameter travels in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Route,
    Query,
    Header,
    Body,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Route => "route",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Body => "body",
        }
    }

    pub fn all() -> Vec<ParameterLocation> {
        vec![
            ParameterLocation::Route,
            ParameterLocation::Query,
            ParameterLocation::Header,
            ParameterLocation::Body,
        ]
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "route" => Ok(ParameterLocation::Route),
            "query" => Ok(ParameterLocation::Query),
            "header" => Ok(ParameterLocation::Header),
            "body" => Ok(ParameterLocation::Body),
            _ => Err(Error::config(format!("unknown parameter location: {s}"))),
        }
    }
}

/// Declared value type of a parameter.
///
/// Governs coercion at test-invocation time only; generation always emits
/// the literal string value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    #[default]
    String,
    Number,
    Boolean,
}

/// Whether a parameter is shown unconditionally or only while another
/// parameter holds a specific value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Always,
    Conditionally,
}

/// One configurable input to a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    /// Literal example/default value
    #[serde(default)]
    pub value: String,
    pub location: ParameterLocation,
    #[serde(rename = "type", default)]
    pub kind: ParameterKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub visibility: Visibility,
    /// Name of the parameter this one's visibility depends on
    #[serde(default)]
    pub visibility_condition_param_name: Option<String>,
    /// Value the referenced parameter must hold for this one to be active
    #[serde(default)]
    pub visibility_condition_value: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Parameter {
    /// A plain always-visible parameter
    pub fn new(name: &str, value: &str, location: ParameterLocation) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            location,
            kind: ParameterKind::String,
            required: false,
            visibility: Visibility::Always,
            visibility_condition_param_name: None,
            visibility_condition_value: None,
            description: String::new(),
        }
    }

    /// Label shown to users, with the `*` marker for required parameters
    pub fn label(&self) -> String {
        if self.required {
            format!("{}*", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Author-authored literal snippet shown alongside generated ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSnippet {
    pub label: String,
    pub highlight_style: HighlightStyle,
    pub body: String,
}

/// Example response documented for an endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseExample {
    pub status_code: u16,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// JSON text, opaque to the generation engine
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub display_icon: String,
    #[serde(default)]
    pub display_color: String,
}

/// One documented API operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub method: HttpMethod,
    /// URL template; may contain `{placeholder}` tokens naming route parameters
    #[serde(default)]
    pub endpoint_template: String,
    #[serde(default)]
    pub auth_required: bool,
    /// Presentation hint only
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Generator identifiers chosen by the author
    #[serde(default)]
    pub requested_generators: Vec<String>,
    #[serde(default)]
    pub custom_code_snippets: Vec<CustomSnippet>,
    #[serde(default)]
    pub responses: Vec<ResponseExample>,
}

impl Endpoint {
    pub fn new(title: &str, method: HttpMethod, endpoint_template: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            method,
            endpoint_template: endpoint_template.to_string(),
            auth_required: false,
            collapsed: false,
            parameters: Vec::new(),
            requested_generators: Vec::new(),
            custom_code_snippets: Vec::new(),
            responses: Vec::new(),
        }
    }
}

/// Top-level persisted unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub title: String,
    /// Derived at creation (title + timestamp, slugified); immutable afterwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    pub version: u32,
    #[serde(rename = "data", default)]
    pub endpoints: Vec<Endpoint>,
}

impl Collection {
    /// Create a collection, deriving its slug from the title and the current
    /// UTC timestamp
    pub fn new(title: &str, description: &str) -> Self {
        let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S");
        Self {
            title: title.to_string(),
            slug: Some(slugify(&format!("{title} {stamp}"))),
            description: description.to_string(),
            version: 1,
            endpoints: Vec::new(),
        }
    }

    /// Parse the persisted JSON document shape
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to the persisted JSON document shape
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Converts a string to a URL-safe slug.
///
/// Lowercases, keeps alphanumerics, and collapses every other run of
/// characters into a single `-`.
pub fn slugify(s: &str) -> String {
    let mut result = String::new();
    let mut prev_dash = false;

    for ch in s.chars() {
        if ch.is_alphanumeric() {
            result.extend(ch.to_lowercase());
            prev_dash = false;
        } else if !prev_dash && !result.is_empty() {
            result.push('-');
            prev_dash = true;
        }
    }

    result.trim_end_matches('-').to_string()
}
