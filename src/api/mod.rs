//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses
//! according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
