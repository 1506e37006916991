//! Apidox Core Library
//!
//! This library provides the core functionality for documenting API
//! endpoints: generating ready-to-run request snippets for nine client
//! ecosystems, exchanging collections with Postman, and test-invoking
//! documented endpoints against a live server.

#![deny(unsafe_code)]

pub mod config;
pub mod docs;
pub mod error;
pub mod generation;
pub mod invoker;
pub mod postman;

pub use crate::{
    config::DocsConfig,
    docs::{Collection, Endpoint, Parameter},
    error::{Error, Result},
    generation::{CodeBuilder, GeneratedCode, GeneratorRegistry, RequestIr},
    invoker::{TestInput, TestInvoker, TestReport},
};
