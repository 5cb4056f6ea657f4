//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Shortcode generation and format validation
//! - [`db_error`] - Structured classification of database errors

pub mod code_generator;
pub mod db_error;
