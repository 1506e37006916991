//! Postman Collection v2.1 transcoder.
//!
//! Converts between the persisted [`crate::docs::Collection`] shape and the
//! Postman Collection v2.1 JSON schema, in both directions. Import is lossy
//! by design: Postman has no conditional-visibility concept, so re-imported
//! parameters are always visible, and response display metadata collapses to
//! a binary success/failure distinction.

pub mod export;
pub mod import;
pub mod types;

pub use export::{export_file_name, to_postman_collection, to_postman_json};
pub use import::from_postman_collection;
pub use types::PostmanCollection;

/// Fixed schema URL written into every exported collection
pub const POSTMAN_SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";
