//! Domain layer: entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access traits
//!
//! The domain layer has no dependency on the HTTP or persistence layers.

pub mod entities;
pub mod repositories;
