//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! parameterized queries.
//!
//! # Repositories
//!
//! - [`PgShortcodeRepository`] - Shortcode storage, lookup and visit counting

pub mod pg_shortcode_repository;

pub use pg_shortcode_repository::PgShortcodeRepository;
