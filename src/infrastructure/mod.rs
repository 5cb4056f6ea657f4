//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`database`] - Connection pool bootstrapping and migrations
//! - [`persistence`] - PostgreSQL repository implementations

pub mod database;
pub mod persistence;
