//! Core types for the generation domain

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Syntax-highlighting style tag declared by a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    Blade,
    Css,
    Gdscript,
    Html,
    Javascript,
    Json,
    Php,
    Sql,
    Twig,
    Xml,
    Yaml,
}

impl HighlightStyle {
    /// Get the display name for this style
    pub fn display_name(&self) -> &'static str {
        match self {
            HighlightStyle::Blade => "Blade",
            HighlightStyle::Css => "CSS",
            HighlightStyle::Gdscript => "GDScript",
            HighlightStyle::Html => "HTML",
            HighlightStyle::Javascript => "JavaScript",
            HighlightStyle::Json => "JSON",
            HighlightStyle::Php => "PHP",
            HighlightStyle::Sql => "SQL",
            HighlightStyle::Twig => "Twig",
            HighlightStyle::Xml => "XML",
            HighlightStyle::Yaml => "YAML",
        }
    }

    /// Get all supported styles
    pub fn all() -> Vec<HighlightStyle> {
        vec![
            HighlightStyle::Blade,
            HighlightStyle::Css,
            HighlightStyle::Gdscript,
            HighlightStyle::Html,
            HighlightStyle::Javascript,
            HighlightStyle::Json,
            HighlightStyle::Php,
            HighlightStyle::Sql,
            HighlightStyle::Twig,
            HighlightStyle::Xml,
            HighlightStyle::Yaml,
        ]
    }
}

impl fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            HighlightStyle::Blade => "blade",
            HighlightStyle::Css => "css",
            HighlightStyle::Gdscript => "gdscript",
            HighlightStyle::Html => "html",
            HighlightStyle::Javascript => "javascript",
            HighlightStyle::Json => "json",
            HighlightStyle::Php => "php",
            HighlightStyle::Sql => "sql",
            HighlightStyle::Twig => "twig",
            HighlightStyle::Xml => "xml",
            HighlightStyle::Yaml => "yaml",
        };
        f.write_str(tag)
    }
}

impl FromStr for HighlightStyle {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blade" => Ok(HighlightStyle::Blade),
            "css" => Ok(HighlightStyle::Css),
            "gdscript" => Ok(HighlightStyle::Gdscript),
            "html" => Ok(HighlightStyle::Html),
            "javascript" | "js" => Ok(HighlightStyle::Javascript),
            "json" => Ok(HighlightStyle::Json),
            "php" => Ok(HighlightStyle::Php),
            "sql" => Ok(HighlightStyle::Sql),
            "twig" => Ok(HighlightStyle::Twig),
            "xml" => Ok(HighlightStyle::Xml),
            "yaml" | "yml" => Ok(HighlightStyle::Yaml),
            _ => Err(crate::error::Error::config(format!(
                "unknown highlight style: {s}"
            ))),
        }
    }
}

/// One generated snippet: source text plus its highlighting style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub style: HighlightStyle,
    pub code: String,
}
