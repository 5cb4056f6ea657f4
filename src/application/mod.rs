//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::ShortenService`] - Shortcode creation
//! - [`services::RedirectService`] - Shortcode resolution with visit counting
//! - [`services::StatsService`] - Visit statistics

pub mod services;
