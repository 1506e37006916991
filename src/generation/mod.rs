//! Generation domain - turns one endpoint description into client code.
//!
//! The flow is: an [`crate::docs::Endpoint`] is projected into a
//! backend-agnostic [`RequestIr`], then each requested backend in the
//! [`GeneratorRegistry`] emits source text for its target ecosystem.
//! Backends are stateless and pure; identical inputs produce byte-identical
//! output.

pub mod builders;
pub mod ir;
pub mod registry;
pub mod types;

pub use builders::CodeBuilder;
pub use ir::RequestIr;
pub use registry::{DEFAULT_GENERATOR_IDS, GeneratorRegistry};
pub use types::{GeneratedCode, HighlightStyle};
